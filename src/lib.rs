#![allow(clippy::module_inception)]

//! # ASCII Painter
//!
//! A text-based raster drawing engine. Commands read one per line create a
//! character canvas, draw horizontal/vertical lines and rectangle outlines on
//! it, and bucket-fill 4-connected regions. The canvas is rendered as a
//! bordered ASCII frame after every successful command.

pub mod canvas;
pub mod command;
pub mod config;
pub mod errors;
pub mod session;

pub use canvas::{Canvas, FrameRenderer, Point, Renderer};
pub use command::Command;
pub use config::{load_config, PainterConfig};
pub use errors::{PainterError, Result};
pub use session::{apply, LineFailure, Outcome, RunReport, Session};
