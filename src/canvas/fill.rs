//! Bucket fill over 4-connected regions

use tracing::debug;

use super::canvas::Canvas;
use super::shapes::Point;
use crate::errors::Result;

/// Result of a flood fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillReport {
    /// Character that was replaced
    pub target: char,
    /// Character written
    pub color: char,
    /// Cells changed, in visit order
    pub changed: Vec<Point>,
}

impl FillReport {
    /// Number of cells changed
    pub fn len(&self) -> usize {
        self.changed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Replace the region of equal characters containing `seed` with `color`.
///
/// Only the seed is bounds-checked; neighbours off the canvas are skipped.
/// A cell is marked as processed by overwriting it, so each cell enters the
/// work stack at most once after conversion and the walk always terminates.
pub fn flood_fill(canvas: &mut Canvas, seed: Point, color: char) -> Result<FillReport> {
    let target = canvas.get(seed.x, seed.y)?;
    let mut report = FillReport {
        target,
        color,
        changed: Vec::new(),
    };

    if target == color {
        debug!(%seed, color = %color, "fill is a no-op");
        return Ok(report);
    }

    let mut stack = vec![seed];
    while let Some(current) = stack.pop() {
        // A cell may be pushed once per neighbour, up to four times, before it is converted
        if canvas.get(current.x, current.y)? != target {
            continue;
        }
        canvas.set(current.x, current.y, color)?;
        report.changed.push(current);

        let neighbours = [
            Point::new(current.x + 1, current.y),
            Point::new(current.x, current.y + 1),
            Point::new(current.x - 1, current.y),
            Point::new(current.x, current.y - 1),
        ];
        for neighbour in neighbours {
            if canvas.contains(neighbour.x, neighbour.y)
                && canvas.get(neighbour.x, neighbour.y)? == target
            {
                stack.push(neighbour);
            }
        }
    }

    debug!(%seed, target = %target, color = %color, changed = report.len(), "fill complete");
    Ok(report)
}
