//! Download records for the downloads panel.
//!
//! Only bookkeeping lives here; transfers are performed by the content frame.

use uuid::Uuid;

use super::now_millis;
use crate::types::download::{DownloadEntry, DownloadStatus};

#[derive(Debug, Default)]
pub struct DownloadManager {
    downloads: Vec<DownloadEntry>,
}

impl DownloadManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a download at the front of the list. Returns its ID.
    pub fn add(&mut self, name: &str, url: &str, status: DownloadStatus, size: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.downloads.insert(
            0,
            DownloadEntry {
                id: id.clone(),
                name: name.to_string(),
                url: url.to_string(),
                status,
                size: size.to_string(),
                timestamp: now_millis(),
            },
        );
        id
    }

    pub fn update_status(&mut self, id: &str, status: DownloadStatus) -> bool {
        match self.downloads.iter_mut().find(|d| d.id == id) {
            Some(download) => {
                download.status = status;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&DownloadEntry> {
        self.downloads.iter().find(|d| d.id == id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.downloads.len();
        self.downloads.retain(|d| d.id != id);
        self.downloads.len() != before
    }

    pub fn list(&self) -> &[DownloadEntry] {
        &self.downloads
    }

    pub fn replace_all(&mut self, downloads: Vec<DownloadEntry>) {
        self.downloads = downloads;
    }

    pub fn clear(&mut self) {
        self.downloads.clear();
    }
}
