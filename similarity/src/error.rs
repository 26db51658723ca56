//! Similarity error types.

use tabula_core::ValidationError;
use thiserror::Error;

/// Result type for similarity operations.
pub type SimilarityResult<T> = Result<T, SimilarityError>;

/// Failures raised by the neighborhood-overlap capability itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlapError {
    #[error("node index {index} is not in the graph view")]
    UnknownIndex { index: usize },
}

/// Errors that can occur while scoring similarity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimilarityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Passed through from the capability without reinterpretation.
    #[error("neighborhood overlap failed: {0}")]
    Capability(#[from] OverlapError),
}
