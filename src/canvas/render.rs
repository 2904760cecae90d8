//! Renderer trait for converting a canvas to text output

use super::canvas::Canvas;

/// Trait for renderers that turn a canvas snapshot into printable text
pub trait Renderer: Send + Sync {
    /// Render the whole canvas
    fn render(&self, canvas: &Canvas) -> String;

    /// Name of this renderer
    fn name(&self) -> &'static str;
}

/// Bordered ASCII frame
///
/// ```text
/// ------
/// |x   |
/// |  oo|
/// ------
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FrameRenderer {
    horizontal: char,
    vertical: char,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self {
            horizontal: '-',
            vertical: '|',
        }
    }
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom border glyphs
    pub fn with_borders(horizontal: char, vertical: char) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    fn border(&self, width: usize) -> String {
        std::iter::repeat(self.horizontal).take(width + 2).collect()
    }
}

impl Renderer for FrameRenderer {
    fn render(&self, canvas: &Canvas) -> String {
        let border = self.border(canvas.width());
        let mut out = String::with_capacity((canvas.width() + 3) * (canvas.height() + 2));

        out.push_str(&border);
        out.push('\n');
        for row in canvas.rows() {
            out.push(self.vertical);
            out.extend(row.iter());
            out.push(self.vertical);
            out.push('\n');
        }
        out.push_str(&border);
        out.push('\n');
        out
    }

    fn name(&self) -> &'static str {
        "Frame"
    }
}
