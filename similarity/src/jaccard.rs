//! Jaccard similarity scoring.

use std::time::Instant;

use petgraph::graph::NodeIndex;
use tabula_core::{round_half_away, NodeId, ValidationError};
use tabula_graph::Graph;
use tracing::debug;

use crate::error::SimilarityResult;
use crate::matrix::SimilarityMatrix;
use crate::options::SimilarityOptions;
use crate::overlap::neighborhood_overlap;
use crate::view::GraphView;

/// Jaccard similarity between every pair of `nodes` (every node when `None`).
///
/// Labels follow the caller's order, or node-table order when `nodes` is
/// omitted. Scores are rounded to `options.round_to` decimal places.
pub fn jaccard_similarity(
    graph: &Graph,
    nodes: Option<&[NodeId]>,
    options: &SimilarityOptions,
) -> SimilarityResult<SimilarityMatrix> {
    let clock = Instant::now();
    graph.validate()?;

    let labels: Vec<NodeId> = match nodes {
        Some(ids) => ids.to_vec(),
        None => graph.all_node_ids(),
    };

    let view = GraphView::from_graph(graph);
    let subset = labels
        .iter()
        .map(|&id| {
            view.index_of(id).ok_or_else(|| {
                debug!(node = %id, "similarity.jaccard.rejected");
                ValidationError::invalid_argument(format!("node {} does not exist", id))
            })
        })
        .collect::<Result<Vec<NodeIndex>, _>>()?;

    let raw = neighborhood_overlap(&view, &subset, options.direction)?;
    let values = raw
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|x| round_half_away(x, options.round_to))
                .collect()
        })
        .collect();

    debug!(
        nodes = labels.len(),
        direction = %options.direction,
        round_to = options.round_to,
        duration_ms = clock.elapsed().as_millis() as u64,
        "similarity.jaccard.completed"
    );
    Ok(SimilarityMatrix::new(labels, values))
}
