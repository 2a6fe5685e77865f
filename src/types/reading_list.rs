use serde::{Deserialize, Serialize};

/// A page saved for later reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingListEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    pub timestamp: i64,
}

/// Result of adding a page to the reading list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingListAdd {
    Added,
    AlreadyPresent,
}
