//! Tabula Graph Storage
//!
//! This crate provides the tabular graph store:
//! - Node and edge tables keyed by never-reused identifiers
//! - Rectangular column schema with missing-value back-fill
//! - Active selection over nodes or edges
//! - Adjacency index: find edges from/to a node
//! - Structural validation and the per-graph audit log

mod config;
mod error;
mod graph;
mod index;
mod selection;
mod table;

pub use config::GraphConfig;
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, TableRow};
pub use selection::Selection;
pub use table::Table;
