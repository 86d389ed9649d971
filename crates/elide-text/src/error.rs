//! Error types for truncation passes.

use thiserror::Error;

/// Result type for truncation operations.
pub type Result<T> = std::result::Result<T, TruncateError>;

/// Errors that can abort a truncation pass.
///
/// A single word wider than its container is not an error; the finder
/// reports it through [`TruncationResult::overflowed_single_word`].
///
/// [`TruncationResult::overflowed_single_word`]: crate::TruncationResult::overflowed_single_word
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TruncateError {
    /// The text produced no word tokens.
    #[error("no content to truncate")]
    NoContent,

    /// The text selector did not match any region of the container.
    #[error("text selector {0:?} matched no region")]
    SelectorNotFound(String),

    /// The layout host reported a word it could not measure.
    #[error("layout host has no measurement for word {0}")]
    MissingMeasurement(usize),

    /// Container width was zero, negative or NaN.
    #[error("container width must be positive, got {0}")]
    InvalidContainer(f32),

    /// Height budget was zero, negative or NaN.
    #[error("height budget must be positive, got {0}")]
    InvalidBudget(f32),

    /// The rendered text does not contain the ellipsis marker.
    #[error("ellipsis marker {0:?} not found in rendered text")]
    MarkerNotFound(String),

    /// Every word fits inside the height budget.
    #[error("no word exceeds the height budget")]
    NoBoundary,
}
