//! Error types for the puzzle solvers

use thiserror::Error;
use wayfind_core::GridError;

/// Error returned by a day's `solve` function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The map could not be built
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
    /// A line of non-grid input doesn't match the expected structure
    #[error("invalid input on line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },
    /// The puzzle requires a route that does not exist
    #[error("no path from start to end")]
    NoPath,
    /// A value outgrew its integer type
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

impl PuzzleError {
    pub(crate) fn invalid(line: usize, reason: impl Into<String>) -> Self {
        PuzzleError::InvalidFormat {
            line,
            reason: reason.into(),
        }
    }
}
