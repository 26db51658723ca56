//! Mutation options.

/// Name recorded in the audit log when none is configured.
pub const DEFAULT_OPERATION: &str = "mutate_attributes_with_selection";

/// When formula results become visible in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    /// Commit after each formula. A later formula that fails leaves the
    /// earlier ones applied.
    #[default]
    Sequential,
    /// Stage every formula on a scratch copy of the table and commit only
    /// when the whole batch has evaluated.
    Atomic,
}

/// Options for one mutation batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOptions {
    pub commit_mode: CommitMode,
    /// Operation name written to the audit log.
    pub operation: String,
}

impl Default for MutationOptions {
    fn default() -> Self {
        Self {
            commit_mode: CommitMode::default(),
            operation: DEFAULT_OPERATION.to_string(),
        }
    }
}

impl MutationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commit_mode(mut self, mode: CommitMode) -> Self {
        self.commit_mode = mode;
        self
    }

    pub fn atomic(self) -> Self {
        self.with_commit_mode(CommitMode::Atomic)
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = operation.into();
        self
    }
}
