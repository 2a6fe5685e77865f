use serde::{Deserialize, Serialize};

/// A saved bookmark. Bookmarks are keyed by URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
    /// Unix epoch milliseconds.
    pub added: i64,
}
