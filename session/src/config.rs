//! Session configuration.

use tabula_graph::GraphConfig;
use tabula_mutation::MutationOptions;
use tabula_similarity::SimilarityOptions;

/// Defaults applied by a session's operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    /// Used when the session creates its own graph.
    pub graph: GraphConfig,
    pub mutation: MutationOptions,
    pub similarity: SimilarityOptions,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(mut self, graph: GraphConfig) -> Self {
        self.graph = graph;
        self
    }

    pub fn with_mutation(mut self, mutation: MutationOptions) -> Self {
        self.mutation = mutation;
        self
    }

    pub fn with_similarity(mut self, similarity: SimilarityOptions) -> Self {
        self.similarity = similarity;
        self
    }
}
