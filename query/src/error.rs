//! Query error types.

use tabula_core::ValidationError;
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while answering a predicate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl QueryError {
    /// The underlying validation failure.
    pub fn as_validation(&self) -> &ValidationError {
        match self {
            QueryError::Validation(e) => e,
        }
    }
}
