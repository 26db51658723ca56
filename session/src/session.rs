//! Session manager.

use tabula_core::{EdgeId, EntityKind, NodeId, Row, ValidationResult, Value};
use tabula_graph::{Graph, Selection};
use tabula_journal::AuditLog;
use tabula_mutation::{Assignment, MutationExecutor, MutationOutcome};
use tabula_query as query;
use tabula_similarity::{jaccard_similarity, Direction, SimilarityMatrix, SimilarityOptions};
use tracing::debug;

use crate::config::SessionConfig;
use crate::error::SessionResult;

/// Session ID type.
pub type SessionId = u64;

/// A Tabula session.
pub struct Session {
    /// Unique session ID.
    id: SessionId,
    /// Operation defaults.
    config: SessionConfig,
    /// Session-specific graph.
    graph: Graph,
}

impl Session {
    /// Create a new session with an empty graph.
    pub fn new(id: SessionId) -> Self {
        Self::with_config(id, SessionConfig::default())
    }

    /// Create a new session with an empty graph built from `config.graph`.
    pub fn with_config(id: SessionId, config: SessionConfig) -> Self {
        let graph = Graph::with_config(config.graph.clone());
        Self { id, config, graph }
    }

    /// Create a session with an existing graph.
    pub fn with_graph(id: SessionId, graph: Graph) -> Self {
        let config = SessionConfig::default().with_graph(graph.config().clone());
        Self { id, config, graph }
    }

    /// Get the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    /// Get a reference to the graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Get a mutable reference to the graph.
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Consume the session, returning its graph.
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// The graph's audit log.
    pub fn log(&self) -> &AuditLog {
        self.graph.log()
    }

    // ==================== Mutation ====================

    /// Apply `assignments` to the active selection of `kind` and return the
    /// mutated graph.
    pub fn mutate_attributes_with_selection(
        &mut self,
        kind: EntityKind,
        assignments: &[Assignment],
    ) -> SessionResult<&Graph> {
        self.mutate(kind, assignments)?;
        Ok(&self.graph)
    }

    /// Same as [`Session::mutate_attributes_with_selection`], returning what the batch did.
    pub fn mutate(
        &mut self,
        kind: EntityKind,
        assignments: &[Assignment],
    ) -> SessionResult<MutationOutcome> {
        debug!(session = self.id, kind = %kind, formulas = assignments.len(), "session.mutate");
        let options = self.config.mutation.clone();
        let outcome =
            MutationExecutor::with_options(&mut self.graph, options).mutate(kind, assignments)?;
        Ok(outcome)
    }

    // ==================== Predicates ====================

    pub fn is_edge_mutual(&self, id: EdgeId) -> SessionResult<bool> {
        Ok(query::is_edge_mutual(&self.graph, id)?)
    }

    pub fn is_edge_loop(&self, id: EdgeId) -> SessionResult<bool> {
        Ok(query::is_edge_loop(&self.graph, id)?)
    }

    /// [`Session::is_edge_mutual`] for an identifier given as a loose value.
    pub fn is_edge_mutual_value(&self, id: &Value) -> SessionResult<bool> {
        let edge = query::resolve_edge_value(&self.graph, id)?;
        self.is_edge_mutual(edge.id())
    }

    /// [`Session::is_edge_loop`] for an identifier given as a loose value.
    pub fn is_edge_loop_value(&self, id: &Value) -> SessionResult<bool> {
        let edge = query::resolve_edge_value(&self.graph, id)?;
        Ok(edge.is_loop())
    }

    // ==================== Similarity ====================

    /// Jaccard similarity with optional overrides of the configured defaults.
    ///
    /// `direction` must be `"all"`, `"out"` or `"in"` when given.
    pub fn jaccard_similarity(
        &self,
        nodes: Option<&[NodeId]>,
        direction: Option<&str>,
        round_to: Option<u32>,
    ) -> SessionResult<SimilarityMatrix> {
        let mut options = self.config.similarity;
        if let Some(direction) = direction {
            options.direction = direction.parse::<Direction>()?;
        }
        if let Some(digits) = round_to {
            options.round_to = digits;
        }
        self.jaccard_similarity_with(nodes, &options)
    }

    /// Jaccard similarity with explicit options.
    pub fn jaccard_similarity_with(
        &self,
        nodes: Option<&[NodeId]>,
        options: &SimilarityOptions,
    ) -> SessionResult<SimilarityMatrix> {
        Ok(jaccard_similarity(&self.graph, nodes, options)?)
    }

    // ==================== Selection ====================

    pub fn selection(&self) -> Option<&Selection> {
        self.graph.selection()
    }

    pub fn select_nodes(&mut self, ids: impl IntoIterator<Item = NodeId>) -> ValidationResult<()> {
        self.graph.select_nodes(ids)
    }

    pub fn select_edges(&mut self, ids: impl IntoIterator<Item = EdgeId>) -> ValidationResult<()> {
        self.graph.select_edges(ids)
    }

    pub fn invert_selection(&mut self) -> ValidationResult<()> {
        self.graph.invert_selection()
    }

    pub fn clear_selection(&mut self) {
        self.graph.clear_selection();
    }

    pub fn drop_selection(&mut self) {
        self.graph.drop_selection();
    }
}
