//! Graph storage error types.

use tabula_core::{EdgeId, NodeId, ValidationError};
use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Node not found.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Edge not found.
    #[error("Edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// A row with this identifier is already stored.
    #[error("Duplicate identifier: {0}")]
    DuplicateId(u64),

    /// Column write with the wrong number of values.
    #[error("Column '{column}' has {actual} values for {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Precondition failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl GraphError {
    pub fn column_length(column: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ColumnLength {
            column: column.into(),
            expected,
            actual,
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
