//! Mutation executor - runs one batch of assignments against a graph.
//!
//! The executor validates the whole batch, snapshots the selection,
//! delegates the masked writes to `ops/set.rs` and records the batch in
//! the graph's audit log.

use std::collections::BTreeSet;
use std::time::Instant;

use chrono::Utc;
use tabula_core::{Edge, EntityKind, Node, ValidationError};
use tabula_graph::{Graph, TableRow};
use tracing::debug;

use crate::error::MutationResult;
use crate::formula::Assignment;
use crate::ops::{self, BatchWrites};
use crate::options::MutationOptions;
use crate::result::MutationOutcome;
use crate::validation::check_preconditions;

/// Mutation executor.
pub struct MutationExecutor<'g> {
    graph: &'g mut Graph,
    options: MutationOptions,
}

impl<'g> MutationExecutor<'g> {
    /// Create a new executor with default options.
    pub fn new(graph: &'g mut Graph) -> Self {
        Self::with_options(graph, MutationOptions::default())
    }

    /// Create a new executor with the given options.
    pub fn with_options(graph: &'g mut Graph, options: MutationOptions) -> Self {
        Self { graph, options }
    }

    pub fn options(&self) -> &MutationOptions {
        &self.options
    }

    /// Apply `assignments`, in order, to the selected rows of the `kind` table.
    pub fn mutate(
        &mut self,
        kind: EntityKind,
        assignments: &[Assignment],
    ) -> MutationResult<MutationOutcome> {
        check_preconditions(self.graph, kind, assignments)?;

        let started = Utc::now();
        let clock = Instant::now();

        let (rows, selected, writes) = match kind {
            EntityKind::Node => self.run::<Node>(assignments)?,
            EntityKind::Edge => self.run::<Edge>(assignments)?,
        };

        let elapsed = clock.elapsed();
        let log_seq = self.graph.record(&self.options.operation, started, elapsed);
        debug!(
            kind = %kind,
            formulas = assignments.len(),
            rows,
            selected,
            duration_ms = elapsed.as_millis() as u64,
            seq = log_seq,
            "mutation.batch.completed"
        );

        Ok(MutationOutcome {
            kind,
            rows,
            selected,
            updated_attributes: writes.updated,
            created_attributes: writes.created,
            applied_attributes: writes.applied,
            log_seq,
        })
    }

    fn run<R: TableRow>(
        &mut self,
        assignments: &[Assignment],
    ) -> MutationResult<(usize, usize, BatchWrites)> {
        // The selection does not change during a batch; snapshot it so the
        // graph can be borrowed mutably for the writes.
        let selected: BTreeSet<R::Id> = self
            .graph
            .selection()
            .and_then(R::selected)
            .cloned()
            .ok_or_else(|| ValidationError::missing_selection(R::KIND))?;
        let rows = R::table(self.graph).len();

        let writes =
            ops::apply_assignments::<R>(self.graph, &selected, assignments, self.options.commit_mode)?;
        Ok((rows, selected.len(), writes))
    }
}

/// Apply `assignments` to the active selection of `kind` with default options.
pub fn mutate_attributes_with_selection(
    graph: &mut Graph,
    kind: EntityKind,
    assignments: &[Assignment],
) -> MutationResult<MutationOutcome> {
    MutationExecutor::new(graph).mutate(kind, assignments)
}
