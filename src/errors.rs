use std::sync::Arc;
use thiserror::Error;

use crate::canvas::Point;

/// Errors that can occur while painting
#[derive(Error, Debug)]
pub enum PainterError {
    /// Canvas width or height is not positive
    #[error("Invalid canvas dimension: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    /// Canvas would hold more cells than the configured limit
    #[error("Canvas {width}x{height} exceeds the limit of {max_cells} cells")]
    CanvasTooLarge {
        width: i64,
        height: i64,
        max_cells: usize,
    },

    /// Coordinate lies outside the active canvas
    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// Line is neither horizontal nor vertical
    #[error("Unsupported geometry: line {from} -> {to} is diagonal, only horizontal and vertical lines can be drawn")]
    UnsupportedGeometry { from: Point, to: Point },

    /// Command line could not be parsed
    #[error("Failed to parse '{line}': {reason}")]
    ParseError { line: Arc<String>, reason: Arc<String> },

    /// Drawing command received before any canvas was created
    #[error("Cannot draw without canvas, create one first with 'C w h'")]
    NoCanvas,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(Arc<String>),
}

/// Type alias for Result with PainterError
pub type Result<T> = std::result::Result<T, PainterError>;

impl PainterError {
    /// Create a parse error for a raw command line
    pub fn parse(line: &str, reason: impl Into<String>) -> Self {
        PainterError::ParseError {
            line: Arc::new(line.to_string()),
            reason: Arc::new(reason.into()),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        PainterError::ConfigurationError(Arc::new(message.into()))
    }

    /// Check if the error only affects the current line.
    ///
    /// Drawing and parsing failures leave the session usable, the next
    /// command can be processed normally.
    pub fn is_recoverable(&self) -> bool {
        match self {
            PainterError::InvalidDimension { .. }
            | PainterError::CanvasTooLarge { .. }
            | PainterError::OutOfBounds { .. }
            | PainterError::UnsupportedGeometry { .. }
            | PainterError::ParseError { .. }
            | PainterError::NoCanvas => true,
            PainterError::ConfigurationError(_) => false,
        }
    }
}

/// Enable cloning for PainterError
impl Clone for PainterError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidDimension { width, height } => Self::InvalidDimension {
                width: *width,
                height: *height,
            },
            Self::CanvasTooLarge {
                width,
                height,
                max_cells,
            } => Self::CanvasTooLarge {
                width: *width,
                height: *height,
                max_cells: *max_cells,
            },
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => Self::OutOfBounds {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            },
            Self::UnsupportedGeometry { from, to } => Self::UnsupportedGeometry {
                from: *from,
                to: *to,
            },
            Self::ParseError { line, reason } => Self::ParseError {
                line: Arc::clone(line),
                reason: Arc::clone(reason),
            },
            Self::NoCanvas => Self::NoCanvas,
            Self::ConfigurationError(msg) => Self::ConfigurationError(Arc::clone(msg)),
        }
    }
}
