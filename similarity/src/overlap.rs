//! Neighborhood-overlap capability.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;

use crate::direction::Direction;
use crate::error::OverlapError;
use crate::view::GraphView;

/// Pairwise Jaccard coefficients `|N(i) ∩ N(j)| / |N(i) ∪ N(j)|` for `subset`.
///
/// Entry `[i][j]` compares `subset[i]` with `subset[j]`. A node compared
/// with itself scores 1; two distinct nodes with no neighbors at all
/// score 0. Values are not rounded.
pub fn neighborhood_overlap(
    view: &GraphView,
    subset: &[NodeIndex],
    mode: Direction,
) -> Result<Vec<Vec<f64>>, OverlapError> {
    if let Some(bad) = subset.iter().find(|&&i| !view.contains(i)) {
        return Err(OverlapError::UnknownIndex { index: bad.index() });
    }

    let neighborhoods: Vec<HashSet<NodeIndex>> =
        subset.iter().map(|&i| view.neighbors(i, mode)).collect();

    let n = subset.len();
    let mut out = vec![vec![0.0; n]; n];
    for i in 0..n {
        out[i][i] = 1.0;
        for j in (i + 1)..n {
            let score = if subset[i] == subset[j] {
                1.0
            } else {
                jaccard(&neighborhoods[i], &neighborhoods[j])
            };
            out[i][j] = score;
            out[j][i] = score;
        }
    }
    Ok(out)
}

fn jaccard(a: &HashSet<NodeIndex>, b: &HashSet<NodeIndex>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
