//! Audit log entry types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Sequence number - unique, increasing identifier for each entry.
pub type Seq = u64;

/// One applied operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Sequence number.
    pub seq: Seq,
    /// Name of the operation that was applied.
    pub operation: String,
    /// When the operation started.
    pub timestamp: DateTime<Utc>,
    /// Wall-clock time the operation took, in milliseconds.
    pub duration_ms: u64,
    /// Node table row count after the operation.
    pub node_count: usize,
    /// Edge table row count after the operation.
    pub edge_count: usize,
}

impl LogEntry {
    /// Create a new entry.
    pub fn new(
        seq: Seq,
        operation: impl Into<String>,
        timestamp: DateTime<Utc>,
        duration: Duration,
        node_count: usize,
        edge_count: usize,
    ) -> Self {
        Self {
            seq,
            operation: operation.into(),
            timestamp,
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            node_count,
            edge_count,
        }
    }

    /// Duration as a `std::time::Duration`.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
