//! Character grid with 1-based coordinates

use tracing::debug;

use super::shapes::Point;
use crate::errors::{PainterError, Result};

/// Default blank cell value
pub const BLANK: char = ' ';

/// Default upper bound on `width * height` for session canvases
pub const DEFAULT_MAX_CELLS: usize = 1_000_000;

/// Fixed-size character buffer
///
/// Coordinates run from `(1, 1)` in the top-left corner to
/// `(width, height)` in the bottom-right corner. Every cell always
/// holds exactly one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in cells
    width: usize,
    /// Height in cells
    height: usize,
    /// Cell data (row-major)
    cells: Vec<char>,
    /// Value of untouched cells
    background: char,
}

impl Canvas {
    /// Create a blank canvas
    pub fn new(width: i64, height: i64) -> Result<Self> {
        Self::with_background(width, height, BLANK)
    }

    /// Create a canvas filled with `background`
    pub fn with_background(width: i64, height: i64, background: char) -> Result<Self> {
        Self::with_limit(width, height, background, usize::MAX)
    }

    /// Create a canvas, rejecting anything larger than `max_cells`
    pub fn with_limit(width: i64, height: i64, background: char, max_cells: usize) -> Result<Self> {
        let invalid = || PainterError::InvalidDimension { width, height };
        let too_large = || PainterError::CanvasTooLarge {
            width,
            height,
            max_cells,
        };

        if width < 1 || height < 1 {
            return Err(invalid());
        }
        let w = usize::try_from(width).map_err(|_| too_large())?;
        let h = usize::try_from(height).map_err(|_| too_large())?;
        let size = w.checked_mul(h).filter(|&n| n <= max_cells).ok_or_else(too_large)?;

        debug!(width = w, height = h, "allocating canvas");
        Ok(Self {
            width: w,
            height: h,
            cells: vec![background; size],
            background,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn background(&self) -> char {
        self.background
    }

    /// Check whether `(x, y)` lies on the canvas
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index_of(x, y).is_some()
    }

    /// Fail with `OutOfBounds` unless the point lies on the canvas
    pub fn check(&self, point: Point) -> Result<()> {
        self.index(point.x, point.y).map(|_| ())
    }

    /// Get cell at coordinates
    pub fn get(&self, x: i64, y: i64) -> Result<char> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Set cell at coordinates
    pub fn set(&mut self, x: i64, y: i64, ch: char) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }

    /// Row `y` as a string (1-based)
    pub fn row_string(&self, y: i64) -> Result<String> {
        let start = self.index(1, y)?;
        Ok(self.cells[start..start + self.width].iter().collect())
    }

    /// Count cells holding `ch`
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|&&c| c == ch).count()
    }

    /// Get raw cell data
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline]
    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let col = usize::try_from(x).ok()?.checked_sub(1)?;
        let row = usize::try_from(y).ok()?.checked_sub(1)?;
        if col < self.width && row < self.height {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    fn index(&self, x: i64, y: i64) -> Result<usize> {
        self.index_of(x, y).ok_or(PainterError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }
}
