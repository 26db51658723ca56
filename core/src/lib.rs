//! Tabula Core Types
//!
//! This crate provides the foundational types used throughout Tabula:
//! - Identity types (NodeId, EdgeId, EntityKind)
//! - Value types (the Value enum, with `Null` as the missing-value sentinel)
//! - Row structures (Node, Edge) and the read-only row context formulas see
//! - The shared validation error taxonomy

mod context;
mod entity;
mod error;
mod id;
mod value;

pub use context::*;
pub use entity::*;
pub use error::*;
pub use id::*;
pub use value::*;
