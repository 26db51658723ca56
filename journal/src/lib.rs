//! Tabula Journal
//!
//! Audit log of applied operations.
//!
//! Responsibilities:
//! - Append one record per successful mutation batch
//! - Keep records in application order, never rewriting history
//! - Expose records for inspection and export

mod entry;
mod log;

pub use entry::{LogEntry, Seq};
pub use log::AuditLog;
