use serde::{Deserialize, Serialize};

/// Status of a recorded download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Completed,
    Downloading,
    Failed,
}

/// A download record shown in the downloads panel.
///
/// `size` is a display string (e.g. "2.4 MB"); nothing is transferred by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadEntry {
    pub id: String,
    pub name: String,
    pub url: String,
    pub status: DownloadStatus,
    pub size: String,
    pub timestamp: i64,
}
