//! Core graph storage implementation.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tabula_core::{
    Attributes, Edge, EdgeId, EntityKind, Node, NodeId, Row, ValidationError, ValidationResult,
    Value,
};
use tabula_journal::{AuditLog, Seq};
use tracing::debug;

use crate::config::GraphConfig;
use crate::error::{GraphError, GraphResult};
use crate::index::AdjacencyIndex;
use crate::selection::{complement, Selection};
use crate::table::Table;

/// The in-memory graph: a node table, an edge table, the active selection
/// and the audit log of applied operations.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    config: GraphConfig,
    /// Node storage
    nodes: Table<Node>,
    /// Edge storage
    edges: Table<Edge>,
    /// Adjacency index
    adjacency: AdjacencyIndex,
    /// Active selection, if any
    selection: Option<Selection>,
    /// Applied operations
    log: AuditLog,
}

impl Graph {
    /// Create a new empty directed graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph with the given settings.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            nodes: Table::new(),
            edges: Table::new(),
            adjacency: AdjacencyIndex::new(),
            selection: None,
            log: AuditLog::new(),
        }
    }

    /// Settings this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    // ==================== Node Operations ====================

    /// Create a new node with the given attributes.
    pub fn add_node(&mut self, attributes: Attributes) -> GraphResult<NodeId> {
        let id = self.nodes.alloc_id();
        self.nodes.insert(Node::new(id, attributes))
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The node table.
    pub fn nodes(&self) -> &Table<Node> {
        &self.nodes
    }

    /// Delete a node and all edges involving it.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        if !self.nodes.contains(id) {
            return Err(GraphError::NodeNotFound(id));
        }

        let edges_to_delete: Vec<EdgeId> = self.adjacency.edges_involving(id).collect();
        for edge_id in edges_to_delete {
            self.remove_edge(edge_id)?;
        }

        if let Some(selection) = &mut self.selection {
            selection.remove_node(id);
        }
        self.nodes.remove(id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Set an attribute on a node.
    pub fn set_node_attr(&mut self, id: NodeId, attr_name: &str, value: Value) -> GraphResult<()> {
        if !self.nodes.contains(id) {
            return Err(GraphError::NodeNotFound(id));
        }
        self.nodes.set(id, attr_name, value)
    }

    // ==================== Edge Operations ====================

    /// Create a new edge between two existing nodes.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, attributes: Attributes) -> GraphResult<EdgeId> {
        for endpoint in [from, to] {
            if !self.nodes.contains(endpoint) {
                return Err(GraphError::NodeNotFound(endpoint));
            }
        }

        let id = self.edges.alloc_id();
        self.edges.insert(Edge::new(id, from, to, attributes))?;
        self.adjacency.insert(id, from, to);
        Ok(id)
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// The edge table.
    pub fn edges(&self) -> &Table<Edge> {
        &self.edges
    }

    /// Delete an edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        let edge = self.edges.remove(id).ok_or(GraphError::EdgeNotFound(id))?;
        self.adjacency.remove(id, edge.from(), edge.to());
        if let Some(selection) = &mut self.selection {
            selection.remove_edge(id);
        }
        Ok(edge)
    }

    /// Set an attribute on an edge.
    pub fn set_edge_attr(&mut self, id: EdgeId, attr_name: &str, value: Value) -> GraphResult<()> {
        if !self.edges.contains(id) {
            return Err(GraphError::EdgeNotFound(id));
        }
        self.edges.set(id, attr_name, value)
    }

    /// Edges leaving a node.
    pub fn edges_from(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacency.edges_from(node_id)
    }

    /// Edges entering a node.
    pub fn edges_to(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacency.edges_to(node_id)
    }

    // ==================== Identifier Accessors ====================

    /// Node ids in table order.
    pub fn all_node_ids(&self) -> Vec<NodeId> {
        self.nodes.ids().collect()
    }

    /// Edge ids in table order.
    pub fn all_edge_ids(&self) -> Vec<EdgeId> {
        self.edges.ids().collect()
    }

    /// Returns true if the edge table has rows.
    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Returns true if the node table has rows.
    pub fn has_nodes(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Returns true if the table for `kind` has rows.
    pub fn has_rows(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Node => self.has_nodes(),
            EntityKind::Edge => self.has_edges(),
        }
    }

    // ==================== Selection ====================

    /// The active selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Returns true if a node selection exists (possibly empty).
    pub fn has_node_selection(&self) -> bool {
        self.has_selection(EntityKind::Node)
    }

    /// Returns true if an edge selection exists (possibly empty).
    pub fn has_edge_selection(&self) -> bool {
        self.has_selection(EntityKind::Edge)
    }

    /// Returns true if a selection of `kind` exists (possibly empty).
    pub fn has_selection(&self, kind: EntityKind) -> bool {
        self.selection.as_ref().is_some_and(|s| s.kind() == kind)
    }

    /// Raw identifiers of the selected rows; `None` when nothing is selected.
    pub fn selection_members(&self) -> Option<Vec<u64>> {
        self.selection.as_ref().map(Selection::members)
    }

    /// Replace the selection with the given nodes.
    pub fn select_nodes(&mut self, ids: impl IntoIterator<Item = NodeId>) -> ValidationResult<()> {
        let ids: BTreeSet<NodeId> = ids.into_iter().collect();
        if let Some(missing) = ids.iter().find(|id| !self.nodes.contains(**id)) {
            debug!(node = %missing, "graph.selection.rejected");
            return Err(ValidationError::invalid_argument(format!(
                "node {} does not exist",
                missing
            )));
        }
        debug!(kind = "node", count = ids.len(), "graph.selection.replaced");
        self.selection = Some(Selection::Nodes(ids));
        Ok(())
    }

    /// Replace the selection with the given edges.
    pub fn select_edges(&mut self, ids: impl IntoIterator<Item = EdgeId>) -> ValidationResult<()> {
        let ids: BTreeSet<EdgeId> = ids.into_iter().collect();
        if let Some(missing) = ids.iter().find(|id| !self.edges.contains(**id)) {
            debug!(edge = %missing, "graph.selection.rejected");
            return Err(ValidationError::invalid_argument(format!(
                "edge {} does not exist",
                missing
            )));
        }
        debug!(kind = "edge", count = ids.len(), "graph.selection.replaced");
        self.selection = Some(Selection::Edges(ids));
        Ok(())
    }

    /// Select every row of the scoped table that is not currently selected.
    pub fn invert_selection(&mut self) -> ValidationResult<()> {
        let inverted = match &self.selection {
            Some(Selection::Nodes(ids)) => Selection::Nodes(complement(self.nodes.ids(), ids)),
            Some(Selection::Edges(ids)) => Selection::Edges(complement(self.edges.ids(), ids)),
            None => {
                return Err(ValidationError::invalid_argument(
                    "there is no selection to invert",
                ))
            }
        };
        debug!(kind = %inverted.kind(), count = inverted.len(), "graph.selection.inverted");
        self.selection = Some(inverted);
        Ok(())
    }

    /// Remove every member while keeping the selection (and its kind).
    pub fn clear_selection(&mut self) {
        if let Some(selection) = &mut self.selection {
            selection.clear();
        }
    }

    /// Forget the selection entirely.
    pub fn drop_selection(&mut self) {
        self.selection = None;
    }

    // ==================== Audit Log ====================

    /// The audit log.
    pub fn log(&self) -> &AuditLog {
        &self.log
    }

    /// Record an applied operation with the current row counts.
    pub fn record(&mut self, operation: &str, started: DateTime<Utc>, duration: Duration) -> Seq {
        self.log.append(
            operation,
            started,
            duration,
            self.nodes.len(),
            self.edges.len(),
        )
    }

    // ==================== Validation ====================

    /// Returns true if every structural invariant holds.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check structural invariants, reporting the first violation.
    pub fn validate(&self) -> ValidationResult<()> {
        if !self.nodes.index_consistent() || !self.edges.index_consistent() {
            return Err(ValidationError::invalid_graph("row index out of sync with table"));
        }
        if !self.nodes.is_rectangular() {
            return Err(ValidationError::invalid_graph("node table is not rectangular"));
        }
        if !self.edges.is_rectangular() {
            return Err(ValidationError::invalid_graph("edge table is not rectangular"));
        }
        for edge in self.edges.rows() {
            for endpoint in [edge.from(), edge.to()] {
                if !self.nodes.contains(endpoint) {
                    return Err(ValidationError::invalid_graph(format!(
                        "edge {} references missing node {}",
                        edge.id(),
                        endpoint
                    )));
                }
            }
        }
        if self.adjacency.entry_count() != 2 * self.edges.len() {
            return Err(ValidationError::invalid_graph("adjacency index out of sync with edges"));
        }
        match &self.selection {
            Some(Selection::Nodes(ids)) => {
                if let Some(id) = ids.iter().find(|id| !self.nodes.contains(**id)) {
                    return Err(ValidationError::invalid_graph(format!(
                        "selected node {} does not exist",
                        id
                    )));
                }
            }
            Some(Selection::Edges(ids)) => {
                if let Some(id) = ids.iter().find(|id| !self.edges.contains(**id)) {
                    return Err(ValidationError::invalid_graph(format!(
                        "selected edge {} does not exist",
                        id
                    )));
                }
            }
            None => {}
        }
        Ok(())
    }
}

/// Rows that live in one of a graph's two tables.
///
/// Lets table-generic code (the mutation engine) reach the right table and
/// selection without matching on the row kind.
pub trait TableRow: Row + Sized {
    /// The table holding rows of this kind.
    fn table(graph: &Graph) -> &Table<Self>;

    /// Overwrite one attribute column of this kind's table.
    fn write_column(graph: &mut Graph, name: &str, values: Vec<Value>) -> GraphResult<()>;

    /// Members of `selection` when it scopes this kind of row.
    fn selected(selection: &Selection) -> Option<&BTreeSet<Self::Id>>;
}

impl TableRow for Node {
    fn table(graph: &Graph) -> &Table<Self> {
        &graph.nodes
    }

    fn write_column(graph: &mut Graph, name: &str, values: Vec<Value>) -> GraphResult<()> {
        graph.nodes.write_column(name, values)
    }

    fn selected(selection: &Selection) -> Option<&BTreeSet<NodeId>> {
        selection.nodes()
    }
}

impl TableRow for Edge {
    fn table(graph: &Graph) -> &Table<Self> {
        &graph.edges
    }

    fn write_column(graph: &mut Graph, name: &str, values: Vec<Value>) -> GraphResult<()> {
        graph.edges.write_column(name, values)
    }

    fn selected(selection: &Selection) -> Option<&BTreeSet<EdgeId>> {
        selection.edges()
    }
}
