//! Active selection over nodes or edges.

use std::collections::BTreeSet;

use tabula_core::{EdgeId, EntityKind, NodeId, RowId};

/// The graph's active selection.
///
/// A graph holds `Option<Selection>`: `None` means nothing has been
/// selected, while `Some` with no members is a selection that exists but
/// was cleared. Mutation only checks that a selection of the right kind
/// exists, so the two states behave differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Nodes(BTreeSet<NodeId>),
    Edges(BTreeSet<EdgeId>),
}

impl Selection {
    /// Empty selection of the given kind.
    pub fn empty(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Node => Selection::Nodes(BTreeSet::new()),
            EntityKind::Edge => Selection::Edges(BTreeSet::new()),
        }
    }

    /// Which table this selection scopes.
    pub fn kind(&self) -> EntityKind {
        match self {
            Selection::Nodes(_) => EntityKind::Node,
            Selection::Edges(_) => EntityKind::Edge,
        }
    }

    /// Selected node ids, if this is a node selection.
    pub fn nodes(&self) -> Option<&BTreeSet<NodeId>> {
        match self {
            Selection::Nodes(ids) => Some(ids),
            Selection::Edges(_) => None,
        }
    }

    /// Selected edge ids, if this is an edge selection.
    pub fn edges(&self) -> Option<&BTreeSet<EdgeId>> {
        match self {
            Selection::Edges(ids) => Some(ids),
            Selection::Nodes(_) => None,
        }
    }

    /// Raw member identifiers in ascending order.
    pub fn members(&self) -> Vec<u64> {
        match self {
            Selection::Nodes(ids) => ids.iter().map(|id| id.raw()).collect(),
            Selection::Edges(ids) => ids.iter().map(|id| id.raw()).collect(),
        }
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        match self {
            Selection::Nodes(ids) => ids.len(),
            Selection::Edges(ids) => ids.len(),
        }
    }

    /// Returns true if the selection exists but has no members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every member, keeping the selection's kind.
    pub fn clear(&mut self) {
        match self {
            Selection::Nodes(ids) => ids.clear(),
            Selection::Edges(ids) => ids.clear(),
        }
    }

    pub(crate) fn remove_node(&mut self, id: NodeId) {
        if let Selection::Nodes(ids) = self {
            ids.remove(&id);
        }
    }

    pub(crate) fn remove_edge(&mut self, id: EdgeId) {
        if let Selection::Edges(ids) = self {
            ids.remove(&id);
        }
    }
}

/// Identifiers of `all` that are not in `selected`.
pub(crate) fn complement<I: RowId>(all: impl Iterator<Item = I>, selected: &BTreeSet<I>) -> BTreeSet<I> {
    all.filter(|id| !selected.contains(id)).collect()
}
