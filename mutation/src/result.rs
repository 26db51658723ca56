//! Mutation result types.

use tabula_core::EntityKind;
use tabula_journal::Seq;

/// Outcome of a successful mutation batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    /// Table that was mutated.
    pub kind: EntityKind,
    /// Rows in the table.
    pub rows: usize,
    /// Rows in the selection.
    pub selected: usize,
    /// Attributes that existed before the batch and were overwritten on the selection.
    pub updated_attributes: Vec<String>,
    /// Attributes the batch introduced.
    pub created_attributes: Vec<String>,
    /// Every attribute the batch wrote, in the order first applied.
    pub applied_attributes: Vec<String>,
    /// Audit log entry recording the batch.
    pub log_seq: Seq,
}

impl MutationOutcome {
    /// Rows outside the selection, which kept their values.
    pub fn unselected(&self) -> usize {
        self.rows - self.selected
    }

    /// Every attribute the batch wrote, in application order, without repeats.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.applied_attributes.iter().map(String::as_str)
    }
}
