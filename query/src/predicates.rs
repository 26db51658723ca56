//! Edge predicates.

use tabula_core::{Edge, EdgeId, EntityKind, Row, ValidationError, Value};
use tabula_graph::Graph;
use tracing::debug;

use crate::error::QueryResult;

/// Look up an edge after checking the graph can answer edge questions.
///
/// Fails if the graph is invalid, has no edges, or has no edge `id`.
pub fn resolve_edge(graph: &Graph, id: EdgeId) -> QueryResult<&Edge> {
    graph.validate()?;
    if !graph.has_edges() {
        return Err(ValidationError::empty_table(EntityKind::Edge).into());
    }
    match graph.edge(id) {
        Some(edge) => Ok(edge),
        None => {
            debug!(edge = %id, "query.edge.not_found");
            Err(ValidationError::invalid_argument(format!("edge {} does not exist", id)).into())
        }
    }
}

/// Same as [`resolve_edge`], for an identifier that arrived as a loose value.
pub fn resolve_edge_value<'g>(graph: &'g Graph, id: &Value) -> QueryResult<&'g Edge> {
    let id = EdgeId::try_from(id)?;
    resolve_edge(graph, id)
}

/// Edges running opposite to `id`, other than `id` itself.
pub fn reverse_edges(graph: &Graph, id: EdgeId) -> QueryResult<Vec<EdgeId>> {
    let edge = resolve_edge(graph, id)?;
    Ok(reverse_of(graph, edge))
}

fn reverse_of(graph: &Graph, edge: &Edge) -> Vec<EdgeId> {
    let mut found: Vec<EdgeId> = graph
        .edges_from(edge.to())
        .filter(|&other| other != edge.id())
        .filter(|&other| graph.edge(other).map_or(false, |e| e.is_reverse_of(edge)))
        .collect();
    found.sort();
    found
}

/// Returns true if some other edge runs from this edge's target back to its source.
///
/// The edge itself never counts, so a loop is mutual only when a second
/// loop sits on the same node.
pub fn is_edge_mutual(graph: &Graph, id: EdgeId) -> QueryResult<bool> {
    let edge = resolve_edge(graph, id)?;
    let mutual = !reverse_of(graph, edge).is_empty();
    debug!(edge = %id, mutual, "query.edge.mutual");
    Ok(mutual)
}

/// Returns true if the edge starts and ends at the same node.
pub fn is_edge_loop(graph: &Graph, id: EdgeId) -> QueryResult<bool> {
    let edge = resolve_edge(graph, id)?;
    Ok(edge.is_loop())
}
