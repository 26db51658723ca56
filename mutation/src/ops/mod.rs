//! Mutation operations.

mod set;

pub use set::{apply_assignments, BatchWrites};
