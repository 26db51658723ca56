//! Tabula Mutation
//!
//! Apply attribute formulas to the rows of the active selection.
//!
//! Responsibilities:
//! - Validate the batch up front (graph, table, selection, target names)
//! - Evaluate each formula against every row of the table
//! - Mask the result so only selected rows change
//! - Commit formula by formula (or atomically) and record the batch in the audit log
//!
//! # Module Structure
//!
//! - `executor` - Main MutationExecutor that runs a batch
//! - `formula` - Assignments: attribute name plus a row-local formula
//! - `ops/` - The masked column write
//! - `validation` - Precondition checks
//! - `options` - Commit mode and operation name
//! - `error` - Error types for mutation failures
//! - `result` - Result types for mutation outcomes

mod error;
mod executor;
mod formula;
mod ops;
mod options;
mod result;
mod validation;

pub use error::{MutationError, MutationResult};
pub use executor::{mutate_attributes_with_selection, MutationExecutor};
pub use formula::{Assignment, Formula};
pub use options::{CommitMode, MutationOptions, DEFAULT_OPERATION};
pub use result::MutationOutcome;
