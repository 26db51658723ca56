//! In-memory, append-only audit log.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::time::Duration;

use crate::entry::{LogEntry, Seq};

/// Ordered record of the operations applied to one graph.
#[derive(Debug, Clone)]
pub struct AuditLog {
    /// All recorded entries.
    entries: Vec<LogEntry>,
    /// Next sequence number to assign.
    next_seq: Seq,
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 1,
        }
    }

    /// Append an entry and return its sequence number.
    pub fn append(
        &mut self,
        operation: impl Into<String>,
        timestamp: DateTime<Utc>,
        duration: Duration,
        node_count: usize,
        edge_count: usize,
    ) -> Seq {
        let seq = self.next_seq;
        self.next_seq = seq + 1;
        self.entries.push(LogEntry::new(
            seq,
            operation,
            timestamp,
            duration,
            node_count,
            edge_count,
        ));
        seq
    }

    /// Get all entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Get the most recent entry.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Get entry by sequence number.
    pub fn get(&self, seq: Seq) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.seq == seq)
    }

    /// Entries recorded after `seq`.
    pub fn since(&self, seq: Seq) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter().filter(move |e| e.seq > seq)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as the list of entries.
impl Serialize for AuditLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
