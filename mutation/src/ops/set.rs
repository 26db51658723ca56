//! Masked attribute writes.

use std::collections::BTreeSet;

use tabula_core::{Row, RowContext, RowId, Value};
use tabula_graph::{Graph, Table, TableRow};
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::formula::Assignment;
use crate::options::CommitMode;

/// Which attributes a batch touched.
#[derive(Debug, Default)]
pub struct BatchWrites {
    pub updated: Vec<String>,
    pub created: Vec<String>,
    /// Every attribute written, in the order first applied.
    pub applied: Vec<String>,
}

impl BatchWrites {
    fn note(&mut self, name: &str, existed: bool) {
        if self.applied.iter().any(|n| n == name) {
            return;
        }
        self.applied.push(name.to_string());
        if existed {
            self.updated.push(name.to_string());
        } else {
            self.created.push(name.to_string());
        }
    }
}

/// Apply `assignments` in order to the table of `R`, masked by `selected`.
pub fn apply_assignments<R: TableRow>(
    graph: &mut Graph,
    selected: &BTreeSet<R::Id>,
    assignments: &[Assignment],
    mode: CommitMode,
) -> MutationResult<BatchWrites> {
    match mode {
        CommitMode::Sequential => apply_sequential::<R>(graph, selected, assignments),
        CommitMode::Atomic => apply_atomic::<R>(graph, selected, assignments),
    }
}

fn apply_sequential<R: TableRow>(
    graph: &mut Graph,
    selected: &BTreeSet<R::Id>,
    assignments: &[Assignment],
) -> MutationResult<BatchWrites> {
    let mut writes = BatchWrites::default();
    for assignment in assignments {
        let table = R::table(graph);
        let existed = table.has_column(&assignment.name);
        let column = masked_column(table, selected, assignment)?;
        R::write_column(graph, &assignment.name, column)?;
        writes.note(&assignment.name, existed);
        debug!(
            kind = %R::KIND,
            attr = %assignment.name,
            created = !existed,
            selected = selected.len(),
            "mutation.formula.applied"
        );
    }
    Ok(writes)
}

fn apply_atomic<R: TableRow>(
    graph: &mut Graph,
    selected: &BTreeSet<R::Id>,
    assignments: &[Assignment],
) -> MutationResult<BatchWrites> {
    let mut scratch: Table<R> = R::table(graph).clone();
    let mut writes = BatchWrites::default();
    for assignment in assignments {
        let existed = scratch.has_column(&assignment.name);
        let column = masked_column(&scratch, selected, assignment)?;
        scratch.write_column(&assignment.name, column)?;
        writes.note(&assignment.name, existed);
        debug!(
            kind = %R::KIND,
            attr = %assignment.name,
            created = !existed,
            selected = selected.len(),
            "mutation.formula.staged"
        );
    }

    // Every formula evaluated; publish the staged columns.
    for name in &writes.applied {
        if let Some(column) = scratch.column(name) {
            R::write_column(graph, name, column)?;
        }
    }
    Ok(writes)
}

/// Evaluate `assignment` on every row and keep the result only where selected.
///
/// Unselected rows keep their prior value if the column exists, otherwise
/// they get `Null`.
fn masked_column<R: Row>(
    table: &Table<R>,
    selected: &BTreeSet<R::Id>,
    assignment: &Assignment,
) -> MutationResult<Vec<Value>> {
    let columns = table.columns();
    let existed = table.has_column(&assignment.name);

    table
        .rows()
        .iter()
        .map(|row| {
            let ctx = RowContext::new(row, columns);
            let candidate = assignment
                .eval(&ctx)
                .map_err(|e| MutationError::eval_error(&assignment.name, row.id().raw(), e))?;
            Ok(if selected.contains(&row.id()) {
                candidate
            } else if existed {
                row.get_attr(&assignment.name).cloned().unwrap_or(Value::Null)
            } else {
                Value::Null
            })
        })
        .collect()
}
