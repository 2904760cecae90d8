//! Line and rectangle rasterization

use std::fmt;

use super::canvas::Canvas;
use crate::errors::{PainterError, Result};

/// Default drawing glyph
pub const BRUSH: char = 'x';

/// Canvas coordinate (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Shape trait for drawable primitives
pub trait Shape {
    /// Draw the shape onto the canvas, returning the number of cells written.
    ///
    /// Cells are written in order; an out-of-bounds cell stops the draw and
    /// leaves earlier writes in place.
    fn draw(&self, canvas: &mut Canvas, brush: char) -> Result<usize>;

    /// Top-left and bottom-right corners of the shape
    fn bounds(&self) -> (Point, Point);

    /// Check that the shape can be drawn without touching the canvas
    fn validate(&self, canvas: &Canvas) -> Result<()> {
        let (min, max) = self.bounds();
        canvas.check(min)?;
        canvas.check(max)
    }

    /// Validate first, then draw. Either every cell is written or none is.
    fn draw_checked(&self, canvas: &mut Canvas, brush: char) -> Result<usize> {
        self.validate(canvas)?;
        self.draw(canvas, brush)
    }
}

/// Horizontal or vertical line segment, endpoints inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    fn check_geometry(&self) -> Result<()> {
        if self.is_horizontal() || self.is_vertical() {
            Ok(())
        } else {
            Err(PainterError::UnsupportedGeometry {
                from: self.start,
                to: self.end,
            })
        }
    }
}

impl Shape for Line {
    fn draw(&self, canvas: &mut Canvas, brush: char) -> Result<usize> {
        self.check_geometry()?;
        let (min, max) = self.bounds();

        let mut written = 0;
        if self.is_horizontal() {
            for x in min.x..=max.x {
                canvas.set(x, min.y, brush)?;
                written += 1;
            }
        } else {
            for y in min.y..=max.y {
                canvas.set(min.x, y, brush)?;
                written += 1;
            }
        }
        Ok(written)
    }

    fn bounds(&self) -> (Point, Point) {
        normalize(self.start, self.end)
    }

    fn validate(&self, canvas: &Canvas) -> Result<()> {
        self.check_geometry()?;
        let (min, max) = self.bounds();
        canvas.check(min)?;
        canvas.check(max)
    }
}

/// Rectangle outline between two opposite corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub corner: Point,
    pub opposite: Point,
}

impl Rect {
    pub fn new(corner: Point, opposite: Point) -> Self {
        Self { corner, opposite }
    }

    /// The four border segments: top, bottom, left, right
    pub fn edges(&self) -> [Line; 4] {
        let (min, max) = self.bounds();
        [
            Line::new(min, Point::new(max.x, min.y)),
            Line::new(Point::new(min.x, max.y), max),
            Line::new(min, Point::new(min.x, max.y)),
            Line::new(Point::new(max.x, min.y), max),
        ]
    }
}

impl Shape for Rect {
    fn draw(&self, canvas: &mut Canvas, brush: char) -> Result<usize> {
        let mut written = 0;
        for edge in self.edges() {
            written += edge.draw(canvas, brush)?;
        }
        Ok(written)
    }

    fn bounds(&self) -> (Point, Point) {
        normalize(self.corner, self.opposite)
    }
}

/// Draw a horizontal or vertical line between `start` and `end`
pub fn draw_line(canvas: &mut Canvas, start: Point, end: Point, brush: char) -> Result<usize> {
    Line::new(start, end).draw(canvas, brush)
}

/// Draw the border of the rectangle spanned by two opposite corners
pub fn draw_rectangle(canvas: &mut Canvas, corner: Point, opposite: Point, brush: char) -> Result<usize> {
    Rect::new(corner, opposite).draw(canvas, brush)
}

fn normalize(a: Point, b: Point) -> (Point, Point) {
    (
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
}
