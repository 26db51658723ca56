//! Identity types for Tabula rows.
//!
//! All identifiers are positive 64-bit values that are:
//! - Unique within their table
//! - Immutable once assigned
//! - Never reused after the row is removed

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::{ValidationError, Value};

/// Common behaviour of row identifiers, so tables can be generic over them.
pub trait RowId: Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display {
    /// Build an identifier from its raw value.
    fn from_raw(raw: u64) -> Self;

    /// Get the raw value.
    fn raw(&self) -> u64;
}

/// Unique identifier for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new NodeId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl RowId for NodeId {
    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Unique identifier for an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub u64);

impl EdgeId {
    /// Create a new EdgeId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl RowId for EdgeId {
    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Which of the two tables an operation or selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Node,
    Edge,
}

impl EntityKind {
    /// Columns no mutation may target for this kind of row.
    pub fn reserved_columns(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Node => &["id"],
            EntityKind::Edge => &["id", "from", "to"],
        }
    }

    /// Returns true if `name` is a reserved column for this kind.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_columns().contains(&name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Node => write!(f, "node"),
            EntityKind::Edge => write!(f, "edge"),
        }
    }
}

/// Coerce a loosely-typed argument into a raw identifier.
///
/// Accepts positive integers and floats with no fractional part.
fn raw_id_from_value(value: &Value) -> Result<u64, ValidationError> {
    match value {
        Value::Int(i) if *i > 0 => Ok(*i as u64),
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 && *f >= 1.0 => Ok(*f as u64),
        Value::Int(_) | Value::Float(_) => Err(ValidationError::invalid_argument(format!(
            "identifier must be a positive integer, got {}",
            value
        ))),
        other => Err(ValidationError::invalid_argument(format!(
            "identifier must be numeric, got {}",
            other.type_name()
        ))),
    }
}

impl TryFrom<&Value> for NodeId {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        raw_id_from_value(value).map(NodeId)
    }
}

impl TryFrom<&Value> for EdgeId {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        raw_id_from_value(value).map(EdgeId)
    }
}
