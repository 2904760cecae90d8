//! # Canvas - character grid drawing engine
//!
//! ```text
//!    ┌──────────────┐
//!    │   Command    │  C / L / R / B
//!    └──────┬───────┘
//!           │
//!     ┌─────┼──────────────┐
//!     ▼     ▼              ▼
//!  Canvas  Shapes       Flood fill
//!  (grid)  (line/rect)  (4-connected)
//!     │
//!     ▼
//!  Renderer ──► bordered ASCII frame
//! ```

mod canvas;
mod fill;
mod render;
mod shapes;

pub use canvas::{Canvas, BLANK, DEFAULT_MAX_CELLS};
pub use fill::{flood_fill, FillReport};
pub use render::{FrameRenderer, Renderer};
pub use shapes::{draw_line, draw_rectangle, Line, Point, Rect, Shape, BRUSH};
