use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the global history.
pub const HISTORY_CAP: usize = 50;

/// A single visit in the global (session-wide) history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
    pub timestamp: i64,
}
