//! Error types for grid construction

use thiserror::Error;

use crate::geom::Point;

/// Error raised while building a [`Grid`](crate::Grid) from text.
///
/// All variants are construction-time failures: a grid that exists is
/// rectangular and every marker lookup on it has already succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Input had no non-blank rows
    #[error("grid is empty")]
    EmptyGrid,
    /// A row's length differs from the first row's
    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A sentinel character such as `S` or `E` is absent
    #[error("marker '{0}' not found in grid")]
    MissingMarker(char),
    /// A cell could not be converted to the grid's value type
    #[error("invalid cell '{found}' at {pos}")]
    InvalidCell { pos: Point, found: char },
}
