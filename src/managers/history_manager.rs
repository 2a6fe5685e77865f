//! History Manager for Groove.
//!
//! Global browsing history: most recent first, one entry per URL, capped at
//! [`HISTORY_CAP`] entries.

use super::now_millis;
use crate::types::history::{HistoryEntry, HISTORY_CAP};

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    fn record_visit(&mut self, url: &str, title: &str) -> bool;
    fn list_history(&self) -> &[HistoryEntry];
    fn recent(&self, count: usize) -> &[HistoryEntry];
    fn delete_entry(&mut self, url: &str) -> bool;
    fn clear_all(&mut self);
    fn replace_all(&mut self, entries: Vec<HistoryEntry>);
    fn is_recording_enabled(&self) -> bool;
    fn set_recording_enabled(&mut self, enabled: bool);
}

/// In-memory capped history log.
#[derive(Debug)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    recording_enabled: bool,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            recording_enabled: true,
        }
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Puts the visit at the front, dropping any older entry for the same URL.
    /// Returns false when recording is disabled (ephemeral mode).
    fn record_visit(&mut self, url: &str, title: &str) -> bool {
        if !self.recording_enabled {
            return false;
        }
        self.entries.retain(|e| e.url != url);
        self.entries.insert(
            0,
            HistoryEntry {
                url: url.to_string(),
                title: title.to_string(),
                timestamp: now_millis(),
            },
        );
        self.entries.truncate(HISTORY_CAP);
        true
    }

    fn list_history(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn recent(&self, count: usize) -> &[HistoryEntry] {
        &self.entries[..count.min(self.entries.len())]
    }

    fn delete_entry(&mut self, url: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.url != url);
        self.entries.len() != before
    }

    fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Installs a persisted log, re-applying the dedup and cap rules.
    fn replace_all(&mut self, entries: Vec<HistoryEntry>) {
        self.entries.clear();
        for entry in entries {
            if self.entries.len() == HISTORY_CAP {
                break;
            }
            if !self.entries.iter().any(|e| e.url == entry.url) {
                self.entries.push(entry);
            }
        }
    }

    fn is_recording_enabled(&self) -> bool {
        self.recording_enabled
    }

    fn set_recording_enabled(&mut self, enabled: bool) {
        self.recording_enabled = enabled;
    }
}
