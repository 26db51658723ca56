//! Mutation error types.

use tabula_core::{EvalError, ValidationError};
use tabula_graph::GraphError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    /// The batch was rejected before any row changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A formula failed on some row.
    #[error("Evaluation error: {attr} on row {row}: {source}")]
    EvalError {
        attr: String,
        row: u64,
        source: EvalError,
    },

    /// Storage rejected a column write.
    #[error("Storage error: {0}")]
    Graph(#[from] GraphError),
}

impl MutationError {
    pub fn eval_error(attr: impl Into<String>, row: u64, source: EvalError) -> Self {
        Self::EvalError {
            attr: attr.into(),
            row,
            source,
        }
    }

    /// The validation failure, if this error is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            MutationError::Validation(e) => Some(e),
            MutationError::Graph(GraphError::Validation(e)) => Some(e),
            _ => None,
        }
    }
}
