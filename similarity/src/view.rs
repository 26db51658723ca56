//! petgraph projection of the node and edge tables.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::{Incoming, Outgoing};
use tabula_core::NodeId;
use tabula_graph::Graph;

use crate::direction::Direction;

/// Read-only algorithm view of a graph.
///
/// Nodes are added in node-table order, edges in edge-table order. The
/// view remembers the graph's declared directedness; an undirected view
/// answers every direction with the full neighborhood.
#[derive(Debug, Clone)]
pub struct GraphView {
    graph: DiGraph<NodeId, ()>,
    index: HashMap<NodeId, NodeIndex>,
    directed: bool,
}

impl GraphView {
    /// Project `graph` into a view.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut view = DiGraph::with_capacity(graph.nodes().len(), graph.edges().len());
        let mut index = HashMap::with_capacity(graph.nodes().len());
        for id in graph.nodes().ids() {
            index.insert(id, view.add_node(id));
        }
        for edge in graph.edges().rows() {
            if let (Some(&a), Some(&b)) = (index.get(&edge.from()), index.get(&edge.to())) {
                view.add_edge(a, b, ());
            }
        }
        Self {
            graph: view,
            index,
            directed: graph.is_directed(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// View index of a node.
    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    /// Node behind a view index.
    pub fn node_id(&self, index: NodeIndex) -> Option<NodeId> {
        self.graph.node_weight(index).copied()
    }

    pub(crate) fn contains(&self, index: NodeIndex) -> bool {
        index.index() < self.graph.node_count()
    }

    /// Distinct neighbors of `index` under `direction`, excluding the node itself.
    pub fn neighbors(&self, index: NodeIndex, direction: Direction) -> HashSet<NodeIndex> {
        let direction = if self.directed {
            direction
        } else {
            Direction::All
        };
        let found = match direction {
            Direction::All => self.graph.neighbors_undirected(index),
            Direction::Out => self.graph.neighbors_directed(index, Outgoing),
            Direction::In => self.graph.neighbors_directed(index, Incoming),
        };
        found.filter(|&n| n != index).collect()
    }
}
