//! Reading list: pages saved for later, unique by URL, newest first.

use uuid::Uuid;

use super::now_millis;
use crate::types::reading_list::{ReadingListAdd, ReadingListEntry};

#[derive(Debug, Default)]
pub struct ReadingListManager {
    entries: Vec<ReadingListEntry>,
}

impl ReadingListManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, url: &str, title: &str) -> ReadingListAdd {
        if self.contains(url) {
            return ReadingListAdd::AlreadyPresent;
        }
        self.entries.insert(
            0,
            ReadingListEntry {
                id: Uuid::new_v4().to_string(),
                url: url.to_string(),
                title: title.to_string(),
                timestamp: now_millis(),
            },
        );
        ReadingListAdd::Added
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|e| e.url == url)
    }

    pub fn list(&self) -> &[ReadingListEntry] {
        &self.entries
    }

    pub fn replace_all(&mut self, entries: Vec<ReadingListEntry>) {
        self.entries.clear();
        for entry in entries {
            if !self.contains(&entry.url) {
                self.entries.push(entry);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
