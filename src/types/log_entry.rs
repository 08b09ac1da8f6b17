//! Operations log entry

use serde::{Deserialize, Serialize};

/// Format of `LogEntry::timestamp`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One line of the operations audit trail
///
/// Line layout: `timestamp,operation,details`. `details` may itself contain
/// commas; everything after the second delimiter belongs to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Write time, formatted with [`TIMESTAMP_FORMAT`]
    pub timestamp: String,

    /// Short operation tag, e.g. `add_batch`
    pub operation: String,

    /// Free text describing the operation
    pub details: String,
}
