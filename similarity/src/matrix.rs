//! Labeled square similarity matrix.

use serde::Serialize;
use tabula_core::NodeId;

/// Square matrix of scores with both axes labeled by node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    labels: Vec<NodeId>,
    values: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Build a matrix. `values` must be `labels.len()` rows of `labels.len()` entries.
    pub(crate) fn new(labels: Vec<NodeId>, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(values.len(), labels.len());
        Self { labels, values }
    }

    /// Axis labels, in query order.
    pub fn labels(&self) -> &[NodeId] {
        &self.labels
    }

    /// Rows of the matrix.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Entry comparing nodes `a` and `b` (first occurrence of each label).
    pub fn get_by_id(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        self.get(i, j)
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.len()).all(|i| (0..i).all(|j| self.values[i][j] == self.values[j][i]))
    }

    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.values[i][i]).collect()
    }

    fn position(&self, id: NodeId) -> Option<usize> {
        self.labels.iter().position(|&l| l == id)
    }
}
