//! Persisted UI state.
//!
//! State is stored as independent key → JSON document pairs, one key per
//! registry. Loading treats every key on its own: a missing key or a document
//! that no longer parses leaves the in-memory default in place.

use std::collections::HashMap;

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::Database;
use crate::managers::now_millis;
use crate::types::bookmark::Bookmark;
use crate::types::download::DownloadEntry;
use crate::types::errors::StorageError;
use crate::types::history::HistoryEntry;
use crate::types::privacy::PrivacyCounters;
use crate::types::reading_list::ReadingListEntry;
use crate::types::settings::BrowserSettings;

pub const SETTINGS_KEY: &str = "groove_settings";
pub const COUNTERS_KEY: &str = "groove_counters";
pub const BOOKMARKS_KEY: &str = "groove_bookmarks";
pub const HISTORY_KEY: &str = "groove_history";
pub const DOWNLOADS_KEY: &str = "groove_downloads";
pub const READING_LIST_KEY: &str = "groove_reading_list";

/// Flat key-value storage for JSON documents.
pub trait StateStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// `StateStore` backed by the `kv_store` table.
pub struct SqliteStateStore {
    db: Database,
}

impl SqliteStateStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, StorageError> {
        Ok(Self::new(Database::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self::new(Database::open_in_memory()?))
    }
}

impl StateStore for SqliteStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db.connection().execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now_millis()],
        )?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.db.connection().execute("DELETE FROM kv_store", [])?;
        Ok(())
    }
}

/// Non-durable `StateStore`; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: HashMap<String, String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        Ok(())
    }
}

/// Borrowed view of everything written on save.
pub struct PersistedState<'a> {
    pub settings: &'a BrowserSettings,
    pub counters: &'a PrivacyCounters,
    pub bookmarks: &'a [Bookmark],
    pub history: &'a [HistoryEntry],
    pub downloads: &'a [DownloadEntry],
    pub reading_list: &'a [ReadingListEntry],
}

/// Write every document. Stops at the first failure.
pub fn save_state(store: &mut dyn StateStore, state: &PersistedState<'_>) -> Result<(), StorageError> {
    write_json(store, SETTINGS_KEY, state.settings)?;
    write_json(store, COUNTERS_KEY, state.counters)?;
    write_json(store, BOOKMARKS_KEY, &state.bookmarks)?;
    write_json(store, HISTORY_KEY, &state.history)?;
    write_json(store, DOWNLOADS_KEY, &state.downloads)?;
    write_json(store, READING_LIST_KEY, &state.reading_list)?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn StateStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)
        .map_err(|e| StorageError::SerializationError(format!("{}: {}", key, e)))?;
    store.set(key, &json)
}

/// Raw document for `key`. Storage failures are logged and read as absent.
pub fn read_raw(store: &dyn StateStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("could not read {}: {}", key, e);
            None
        }
    }
}

/// Parsed document for `key`, or `None` if it is absent or unparsable.
pub fn read_json<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Option<T> {
    let raw = read_raw(store, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unreadable {}: {}", key, e);
            None
        }
    }
}
