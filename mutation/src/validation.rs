//! Batch precondition checks.
//!
//! Everything here runs before the first formula is evaluated, so a
//! rejected batch leaves the graph untouched.

use regex_lite::Regex;
use tabula_core::{EntityKind, ValidationError, ValidationResult};
use tabula_graph::Graph;
use tracing::debug;

use crate::formula::Assignment;

/// Pattern every assignment target must match.
pub const ATTRIBUTE_NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_.]*$";

/// Check that a batch may run against `graph`.
///
/// Checks, in order: graph structure, rows in the target table, a selection
/// of the right kind, reserved targets, then target name syntax.
pub fn check_preconditions(
    graph: &Graph,
    kind: EntityKind,
    assignments: &[Assignment],
) -> ValidationResult<()> {
    let result = check(graph, kind, assignments);
    if let Err(e) = &result {
        debug!(kind = %kind, error = %e, "mutation.batch.rejected");
    }
    result
}

fn check(graph: &Graph, kind: EntityKind, assignments: &[Assignment]) -> ValidationResult<()> {
    graph.validate()?;

    if !graph.has_rows(kind) {
        return Err(ValidationError::empty_table(kind));
    }
    if !graph.has_selection(kind) {
        return Err(ValidationError::missing_selection(kind));
    }

    let mut reserved: Vec<String> = Vec::new();
    for a in assignments {
        if kind.is_reserved(&a.name) && !reserved.contains(&a.name) {
            reserved.push(a.name.clone());
        }
    }
    if !reserved.is_empty() {
        return Err(ValidationError::reserved_attribute(reserved));
    }

    let re = Regex::new(ATTRIBUTE_NAME_PATTERN).map_err(|e| {
        ValidationError::invalid_argument(format!("invalid attribute pattern: {}", e))
    })?;
    if let Some(bad) = assignments.iter().find(|a| !re.is_match(&a.name)) {
        return Err(ValidationError::invalid_argument(format!(
            "'{}' is not a valid attribute name",
            bad.name
        )));
    }

    Ok(())
}
