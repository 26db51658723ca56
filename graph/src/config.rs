//! Graph configuration.

/// Settings fixed when a graph is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether edges are directed. Undirected graphs still store `from`/`to`
    /// but neighborhood queries ignore the direction.
    pub directed: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { directed: true }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directed() -> Self {
        Self { directed: true }
    }

    pub fn undirected() -> Self {
        Self { directed: false }
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}
