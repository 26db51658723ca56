//! Common error types for Tabula.

use crate::EntityKind;
use thiserror::Error;

/// Precondition failures shared by every entry point.
///
/// All of these are raised before any table is touched, so a caller that
/// receives one observes the graph exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A structural invariant of the graph does not hold.
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    /// The operation requires rows and the table has none.
    #[error("the {kind} table is empty")]
    EmptyTable { kind: EntityKind },

    /// The operation requires an active selection of the given kind.
    #[error("no {kind} selection is active")]
    MissingSelection { kind: EntityKind },

    /// Mutation targeted `id`, `from` or `to`.
    #[error("cannot mutate reserved attribute(s): {}", .names.join(", "))]
    ReservedAttribute { names: Vec<String> },

    /// An argument was malformed or referenced something that does not exist.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl ValidationError {
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        Self::InvalidGraph {
            reason: reason.into(),
        }
    }

    pub fn empty_table(kind: EntityKind) -> Self {
        Self::EmptyTable { kind }
    }

    pub fn missing_selection(kind: EntityKind) -> Self {
        Self::MissingSelection { kind }
    }

    pub fn reserved_attribute(names: Vec<String>) -> Self {
        Self::ReservedAttribute { names }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type for precondition checks.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors raised while evaluating a formula against a row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The formula read a column the table does not have.
    #[error("unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    /// Operand types do not support the operation.
    #[error("type error: {message}")]
    TypeError { message: String },

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Failure reported by caller-supplied formula code.
    #[error("{0}")]
    Custom(String),
}

impl EvalError {
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Self::UnknownAttribute { name: name.into() }
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::TypeError {
            message: message.into(),
        }
    }

    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Result type for formula evaluation.
pub type EvalResult<T> = Result<T, EvalError>;
