//! Row structures for Tabula.
//!
//! Nodes and edges are the rows of the two tables. Identity columns (`id`,
//! and for edges `from`/`to`) are fixed at construction and exposed only
//! through getters; attributes are the mutable part of a row.

use crate::{Attributes, EdgeId, EntityKind, NodeId, RowId, Value};

/// Behaviour shared by node and edge rows.
pub trait Row: Clone {
    /// Identifier type of this row kind.
    type Id: RowId;

    /// Which table this row lives in.
    const KIND: EntityKind;

    /// The row's identifier.
    fn id(&self) -> Self::Id;

    /// Attribute values.
    fn attributes(&self) -> &Attributes;

    /// Mutable attribute values.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Source and target node, for rows that have them.
    fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        None
    }

    /// Value of a reserved, read-only column (`id`, `from`, `to`).
    fn reserved_value(&self, name: &str) -> Option<Value> {
        reserved_value(self.id().raw(), self.endpoints(), name)
    }

    /// Get an attribute value by name.
    fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes().get(name)
    }

    /// Set an attribute value.
    fn set_attr(&mut self, name: String, value: Value) {
        self.attributes_mut().insert(name, value);
    }
}

/// Read-only columns derived from a row's identity.
pub(crate) fn reserved_value(
    id: u64,
    endpoints: Option<(NodeId, NodeId)>,
    name: &str,
) -> Option<Value> {
    match (name, endpoints) {
        ("id", _) => Some(Value::Int(id as i64)),
        ("from", Some((from, _))) => Some(Value::Int(from.raw() as i64)),
        ("to", Some((_, to))) => Some(Value::Int(to.raw() as i64)),
        _ => None,
    }
}

/// A node row.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    attributes: Attributes,
}

impl Node {
    /// Create a new node with the given attributes.
    pub fn new(id: NodeId, attributes: Attributes) -> Self {
        Self { id, attributes }
    }
}

impl Row for Node {
    type Id = NodeId;
    const KIND: EntityKind = EntityKind::Node;

    fn id(&self) -> NodeId {
        self.id
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

/// An edge row: a directed pair of node ids plus attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    attributes: Attributes,
}

impl Edge {
    /// Create a new edge with the given endpoints and attributes.
    pub fn new(id: EdgeId, from: NodeId, to: NodeId, attributes: Attributes) -> Self {
        Self {
            id,
            from,
            to,
            attributes,
        }
    }

    /// Source node.
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// Target node.
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// Returns true if source and target are the same node.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if `other` runs in the opposite direction between the same nodes.
    pub fn is_reverse_of(&self, other: &Edge) -> bool {
        self.from == other.to && self.to == other.from
    }

    /// Check if this edge touches a specific node.
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.from == node_id || self.to == node_id
    }
}

impl Row for Edge {
    type Id = EdgeId;
    const KIND: EntityKind = EntityKind::Edge;

    fn id(&self) -> EdgeId {
        self.id
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        Some((self.from, self.to))
    }
}
