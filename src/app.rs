//! App Core for Groove.
//!
//! `App` is the single controller owning every piece of session state. Each
//! public method handles one user event to completion and, when it changed a
//! persisted registry, writes the state store (unless ephemeral mode is on).

use std::fs;

use serde_json::Value;

use crate::config::AppConfig;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::download_manager::DownloadManager;
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::reading_list_manager::ReadingListManager;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::persistence::{
    self, MemoryStateStore, PersistedState, SqliteStateStore, StateStore, BOOKMARKS_KEY,
    COUNTERS_KEY, DOWNLOADS_KEY, HISTORY_KEY, READING_LIST_KEY, SETTINGS_KEY,
};
use crate::services::content_frame::{self, FrameDescriptor};
use crate::services::loading_indicator::LoadingIndicator;
use crate::services::privacy_shield::{
    PrivacyShield, PrivacyShieldTrait, RandomSource, SystemRandomSource,
};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::url_resolver::{self, host_title, Resolution, UrlResolver};
use crate::types::bookmark::Bookmark;
use crate::types::download::DownloadStatus;
use crate::types::errors::{SettingsError, StorageError};
use crate::types::history::HistoryEntry;
use crate::types::privacy::PrivacyCounters;
use crate::types::reading_list::ReadingListAdd;
use crate::types::settings::BrowserSettings;
use crate::types::tab::{BrowserView, Tab};

/// Central application struct holding all managers and services.
pub struct App {
    pub tab_manager: TabManager,
    pub settings_engine: SettingsEngine,
    pub history_manager: HistoryManager,
    pub bookmark_manager: BookmarkManager,
    pub reading_list: ReadingListManager,
    pub download_manager: DownloadManager,
    pub privacy_shield: PrivacyShield,
    pub loading: LoadingIndicator,
    resolver: UrlResolver,
    store: Box<dyn StateStore>,
}

impl App {
    /// Opens the on-disk state database described by `config` and restores
    /// the persisted registries.
    pub fn new(config: &AppConfig) -> Result<Self, StorageError> {
        fs::create_dir_all(&config.data_dir).map_err(|e| {
            StorageError::IoError(format!(
                "Failed to create data directory {}: {}",
                config.data_dir.display(),
                e
            ))
        })?;
        let store = SqliteStateStore::open(config.db_path())?;
        log::info!("state database at {}", config.db_path().display());

        let mut app = Self::with_parts(
            Box::new(store),
            Box::new(SystemRandomSource::new()),
            UrlResolver::new(config.search_url.clone()),
        );
        if config.force_ephemeral {
            let mut settings = app.settings().clone();
            settings.ephemeral = true;
            app.settings_engine.replace(settings);
            app.sync_settings();
            log::info!("ephemeral mode forced by configuration");
        }
        Ok(app)
    }

    /// Non-durable session with the default resolver.
    pub fn in_memory() -> Self {
        Self::with_parts(
            Box::new(MemoryStateStore::new()),
            Box::new(SystemRandomSource::new()),
            UrlResolver::default(),
        )
    }

    /// Builds an app over the given store, loads persisted state and opens
    /// the initial home tab.
    pub fn with_parts(
        store: Box<dyn StateStore>,
        rng: Box<dyn RandomSource>,
        resolver: UrlResolver,
    ) -> Self {
        let mut app = Self {
            tab_manager: TabManager::new(),
            settings_engine: SettingsEngine::new(),
            history_manager: HistoryManager::new(),
            bookmark_manager: BookmarkManager::new(),
            reading_list: ReadingListManager::new(),
            download_manager: DownloadManager::new(),
            privacy_shield: PrivacyShield::new(rng),
            loading: LoadingIndicator::new(),
            resolver,
            store,
        };
        app.load_persisted();
        app.tab_manager.create_tab(None, None);
        app
    }

    fn load_persisted(&mut self) {
        let store = self.store.as_ref();

        if let Some(raw) = persistence::read_raw(store, SETTINGS_KEY) {
            if let Err(e) = self.settings_engine.merge_json(&raw) {
                log::warn!("keeping default settings: {}", e);
            }
        }
        if let Some(counters) = persistence::read_json::<PrivacyCounters>(store, COUNTERS_KEY) {
            self.privacy_shield.set_counters(counters);
        }
        if let Some(bookmarks) = persistence::read_json(store, BOOKMARKS_KEY) {
            self.bookmark_manager.replace_all(bookmarks);
        }
        if let Some(history) = persistence::read_json(store, HISTORY_KEY) {
            self.history_manager.replace_all(history);
        }
        if let Some(downloads) = persistence::read_json(store, DOWNLOADS_KEY) {
            self.download_manager.replace_all(downloads);
        }
        if let Some(entries) = persistence::read_json(store, READING_LIST_KEY) {
            self.reading_list.replace_all(entries);
        }

        self.sync_settings();
    }

    /// Writes every registry to the store. Skipped in ephemeral mode;
    /// failures are logged and otherwise ignored.
    fn persist(&mut self) {
        let settings = self.settings_engine.get_settings();
        if settings.ephemeral {
            return;
        }
        let state = PersistedState {
            settings,
            counters: self.privacy_shield.counters(),
            bookmarks: self.bookmark_manager.list_bookmarks(),
            history: self.history_manager.list_history(),
            downloads: self.download_manager.list(),
            reading_list: self.reading_list.list(),
        };
        if let Err(e) = persistence::save_state(self.store.as_mut(), &state) {
            log::warn!("failed to persist state: {}", e);
        }
    }

    /// Propagate settings that other components mirror.
    fn sync_settings(&mut self) {
        let ephemeral = self.settings_engine.get_settings().ephemeral;
        self.history_manager.set_recording_enabled(!ephemeral);
    }

    // ─── Tabs ───

    pub fn new_tab(&mut self, url: Option<&str>, view: Option<BrowserView>) -> String {
        self.tab_manager.create_tab(url, view)
    }

    pub fn close_tab(&mut self, tab_id: &str) -> bool {
        self.tab_manager.close_tab(tab_id)
    }

    pub fn close_active_tab(&mut self) -> bool {
        match self.tab_manager.active_tab_id().map(str::to_string) {
            Some(id) => self.tab_manager.close_tab(&id),
            None => false,
        }
    }

    pub fn switch_tab(&mut self, tab_id: &str) -> bool {
        self.tab_manager.switch_tab(tab_id)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tab_manager.get_active_tab()
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.tab_manager.active_tab_id()
    }

    pub fn tabs(&self) -> &[Tab] {
        self.tab_manager.get_all_tabs()
    }

    // ─── Navigation ───

    /// Resolve URL bar input and apply it to the active tab.
    ///
    /// Returns `None` when the input is blank (nothing happens).
    pub fn navigate(&mut self, input: &str) -> Option<Resolution> {
        self.tab_manager.get_active_tab()?;
        let https_enforce = self.settings_engine.get_settings().https_enforce;
        let resolution = self.resolver.resolve(input, https_enforce)?;

        match &resolution {
            Resolution::Internal(view) => {
                self.tab_manager.open_view(*view);
                log::debug!("opened {}{}", url_resolver::INTERNAL_SCHEME, view);
            }
            Resolution::Web(url) => {
                self.tab_manager.commit_navigation(url);
                log::debug!("navigated to {}", url);
                self.after_page_load(url);
                self.persist();
            }
        }
        Some(resolution)
    }

    /// Side effects of showing a page: global history, shield counters,
    /// loading flag.
    fn after_page_load(&mut self, url: &str) {
        self.history_manager.record_visit(url, &host_title(url));
        let blocked = self
            .privacy_shield
            .record_page_load(self.settings_engine.get_settings());
        log::debug!(
            "shield simulation: {} ads, {} trackers, {} scripts",
            blocked.ads,
            blocked.trackers,
            blocked.scripts
        );
        self.loading.start();
    }

    pub fn go_back(&mut self) -> bool {
        self.tab_manager.go_back()
    }

    pub fn go_forward(&mut self) -> bool {
        self.tab_manager.go_forward()
    }

    /// Re-run the page load side effects for the active web page without
    /// adding a back/forward entry. Returns false when no web page is shown.
    pub fn reload(&mut self) -> bool {
        let url = match self.active_tab() {
            Some(tab) if tab.view == BrowserView::Web && !tab.url.is_empty() => tab.url.clone(),
            _ => return false,
        };
        self.after_page_load(&url);
        self.persist();
        true
    }

    pub fn open_view(&mut self, view: BrowserView) -> bool {
        self.tab_manager.open_view(view)
    }

    pub fn address_bar_text(&self) -> String {
        self.active_tab()
            .map(url_resolver::address_bar_text)
            .unwrap_or_default()
    }

    pub fn frame_descriptor(&self) -> Option<FrameDescriptor> {
        let tab = self.active_tab()?;
        content_frame::frame_for(tab, self.settings())
    }

    /// Whether the address bar shows the lock for the active tab.
    pub fn is_secure(&self) -> bool {
        self.active_tab()
            .map_or(false, |t| content_frame::is_secure(&t.url))
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    // ─── Bookmarks / reading list / history / downloads ───

    /// Active tab's URL and title, if it has a URL.
    fn active_page(&self) -> Option<(String, String)> {
        self.active_tab()
            .filter(|t| !t.url.is_empty())
            .map(|t| (t.url.clone(), t.title.clone()))
    }

    /// Toggle a bookmark for the active page. `None` if the tab has no URL,
    /// otherwise whether the page is now bookmarked.
    pub fn toggle_bookmark(&mut self) -> Option<bool> {
        let (url, title) = self.active_page()?;
        let bookmarked = self.bookmark_manager.toggle_bookmark(&url, &title);
        self.persist();
        Some(bookmarked)
    }

    pub fn is_active_bookmarked(&self) -> bool {
        self.active_page()
            .map_or(false, |(url, _)| self.bookmark_manager.is_bookmarked(&url))
    }

    pub fn remove_bookmark(&mut self, url: &str) -> bool {
        let removed = self.bookmark_manager.remove_bookmark(url);
        if removed {
            self.persist();
        }
        removed
    }

    /// Save the active page for later. `None` if the tab has no URL.
    pub fn add_to_reading_list(&mut self) -> Option<ReadingListAdd> {
        let (url, title) = self.active_page()?;
        let outcome = self.reading_list.add(&url, &title);
        if outcome == ReadingListAdd::Added {
            self.persist();
        }
        Some(outcome)
    }

    pub fn remove_from_reading_list(&mut self, id: &str) -> bool {
        let removed = self.reading_list.remove(id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmark_manager.list_bookmarks()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history_manager.list_history()
    }

    pub fn recent_history(&self, count: usize) -> &[HistoryEntry] {
        self.history_manager.recent(count)
    }

    pub fn delete_history_entry(&mut self, url: &str) -> bool {
        let removed = self.history_manager.delete_entry(url);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear_history(&mut self) {
        self.history_manager.clear_all();
        self.persist();
    }

    pub fn add_download(&mut self, name: &str, url: &str, status: DownloadStatus, size: &str) -> String {
        let id = self.download_manager.add(name, url, status, size);
        self.persist();
        id
    }

    pub fn update_download(&mut self, id: &str, status: DownloadStatus) -> bool {
        let updated = self.download_manager.update_status(id, status);
        if updated {
            self.persist();
        }
        updated
    }

    pub fn remove_download(&mut self, id: &str) -> bool {
        let removed = self.download_manager.remove(id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear_downloads(&mut self) {
        self.download_manager.clear();
        self.persist();
    }

    // ─── Settings ───

    pub fn settings(&self) -> &BrowserSettings {
        self.settings_engine.get_settings()
    }

    pub fn counters(&self) -> &PrivacyCounters {
        self.privacy_shield.counters()
    }

    pub fn resolver(&self) -> &UrlResolver {
        &self.resolver
    }

    pub fn set_setting(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        self.sync_settings();
        self.persist();
        Ok(())
    }

    pub fn toggle_setting(&mut self, key: &str) -> Result<bool, SettingsError> {
        let enabled = self.settings_engine.toggle(key)?;
        self.sync_settings();
        self.persist();
        Ok(enabled)
    }

    pub fn reset_settings(&mut self) {
        self.settings_engine.reset();
        self.sync_settings();
        self.persist();
    }

    /// Wipe the store and return every component to its initial state,
    /// leaving a single fresh home tab.
    pub fn reset_all_data(&mut self) -> Result<(), StorageError> {
        self.store.clear()?;
        self.settings_engine.reset();
        self.privacy_shield.reset();
        self.bookmark_manager.clear();
        self.history_manager.clear_all();
        self.download_manager.clear();
        self.reading_list.clear();
        self.loading = LoadingIndicator::new();
        self.tab_manager = TabManager::new();
        self.tab_manager.create_tab(None, None);
        self.sync_settings();
        log::info!("all browsing data cleared");
        Ok(())
    }
}
