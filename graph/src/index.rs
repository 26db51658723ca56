//! Adjacency index for edge lookups by endpoint.

use std::collections::{HashMap, HashSet};

use tabula_core::{EdgeId, NodeId};

/// Adjacency index: NodeId -> edges leaving / entering it.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// Edges whose `from` is the node
    outbound: HashMap<NodeId, HashSet<EdgeId>>,
    /// Edges whose `to` is the node
    inbound: HashMap<NodeId, HashSet<EdgeId>>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge_id: EdgeId, from: NodeId, to: NodeId) {
        self.outbound.entry(from).or_default().insert(edge_id);
        self.inbound.entry(to).or_default().insert(edge_id);
    }

    pub fn remove(&mut self, edge_id: EdgeId, from: NodeId, to: NodeId) {
        for (index, node_id) in [(&mut self.outbound, from), (&mut self.inbound, to)] {
            if let Some(set) = index.get_mut(&node_id) {
                set.remove(&edge_id);
                if set.is_empty() {
                    index.remove(&node_id);
                }
            }
        }
    }

    /// Edges leaving a node.
    pub fn edges_from(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.outbound
            .get(&node_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Edges entering a node.
    pub fn edges_to(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.inbound
            .get(&node_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// All edges touching a node, each once.
    pub fn edges_involving(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let mut seen = HashSet::new();
        self.edges_from(node_id)
            .chain(self.edges_to(node_id))
            .filter(move |id| seen.insert(*id))
    }

    /// Total number of (node, edge) entries; each edge contributes two.
    pub fn entry_count(&self) -> usize {
        self.outbound.values().map(HashSet::len).sum::<usize>()
            + self.inbound.values().map(HashSet::len).sum::<usize>()
    }
}
