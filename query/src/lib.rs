//! Tabula Query
//!
//! Read-only relational predicates over the edge table.
//!
//! - `is_edge_mutual` - does a reverse edge exist?
//! - `is_edge_loop` - do both endpoints coincide?
//!
//! Predicates never touch the tables, the selection or the audit log.

mod error;
mod predicates;

pub use error::{QueryError, QueryResult};
pub use predicates::{is_edge_loop, is_edge_mutual, resolve_edge, resolve_edge_value, reverse_edges};
