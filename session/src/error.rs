//! Session error types.

use tabula_core::ValidationError;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Precondition failure raised directly by the session.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Graph storage error.
    #[error("graph error: {0}")]
    Graph(#[from] tabula_graph::GraphError),

    /// Mutation error.
    #[error("mutation error: {0}")]
    Mutation(#[from] tabula_mutation::MutationError),

    /// Query error.
    #[error("query error: {0}")]
    Query(#[from] tabula_query::QueryError),

    /// Similarity error.
    #[error("similarity error: {0}")]
    Similarity(#[from] tabula_similarity::SimilarityError),
}

impl SessionError {
    /// The validation failure behind this error, whichever layer raised it.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        use tabula_graph::GraphError;
        use tabula_similarity::SimilarityError;

        match self {
            SessionError::Validation(e) => Some(e),
            SessionError::Graph(GraphError::Validation(e)) => Some(e),
            SessionError::Mutation(e) => e.as_validation(),
            SessionError::Query(e) => Some(e.as_validation()),
            SessionError::Similarity(SimilarityError::Validation(e)) => Some(e),
            _ => None,
        }
    }
}
