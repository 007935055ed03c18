//! Error types for grid construction and queries.

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Errors raised by [Grid](crate::grid::Grid) construction and direct queries. Path searches
/// never produce these; an invalid endpoint simply has no path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate {coordinate} lies outside the {rows}x{cols} grid")]
    OutOfRange {
        coordinate: Coordinate,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("grid dimensions {rows}x{cols} exceed the addressable range")]
    TooLarge { rows: usize, cols: usize },

    #[error("malformed grid map at line {line}: {reason}")]
    MalformedMap { line: usize, reason: String },

    #[error("coordinate {coordinate} does not fit in a point")]
    PointOverflow { coordinate: Coordinate },

    #[error("point ({x}, {y}) has a negative component")]
    NegativePoint { x: i32, y: i32 },
}

pub type Result<T> = std::result::Result<T, GridError>;
