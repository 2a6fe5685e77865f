// Groove state managers
// Managers own the mutable session state: tabs, bookmarks, history, reading list, downloads.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod bookmark_manager;
pub mod download_manager;
pub mod history_manager;
pub mod reading_list_manager;
pub mod tab_manager;

/// Current Unix time in milliseconds.
pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
