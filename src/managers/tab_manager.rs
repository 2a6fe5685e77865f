use uuid::Uuid;

use crate::services::url_resolver::host_title;
use crate::types::tab::{BrowserView, Tab, NEW_TAB_TITLE};

/// Trait defining the tab management interface.
///
/// Navigation methods act on the active tab. The manager never holds zero
/// tabs once the first one exists: closing the last tab opens a fresh one.
pub trait TabManagerTrait {
    fn create_tab(&mut self, url: Option<&str>, view: Option<BrowserView>) -> String;
    fn close_tab(&mut self, tab_id: &str) -> bool;
    fn switch_tab(&mut self, tab_id: &str) -> bool;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn get_active_tab(&self) -> Option<&Tab>;
    fn active_tab_id(&self) -> Option<&str>;
    fn tab_count(&self) -> usize;
    fn open_view(&mut self, view: BrowserView) -> bool;
    fn commit_navigation(&mut self, url: &str) -> bool;
    fn go_back(&mut self) -> bool;
    fn go_forward(&mut self) -> bool;
}

/// In-memory tab manager: an ordered tab list plus the active tab id.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    fn new_tab(url: Option<&str>, view: Option<BrowserView>) -> Tab {
        let id = format!("tab_{}", Uuid::new_v4().simple());
        match url.filter(|u| !u.is_empty()) {
            Some(url) => Tab {
                id,
                url: url.to_string(),
                title: host_title(url),
                view: view.unwrap_or(BrowserView::Web),
                history: vec![url.to_string()],
                history_index: 0,
            },
            None => Tab {
                id,
                url: String::new(),
                title: NEW_TAB_TITLE.to_string(),
                view: view.filter(|v| *v != BrowserView::Web).unwrap_or(BrowserView::Home),
                history: Vec::new(),
                history_index: -1,
            },
        }
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let id = self.active_tab_id.as_deref()?;
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// Move the active tab's cursor to `index` and show that entry.
    fn show_entry(&mut self, index: i64) -> bool {
        let Some(tab) = self.active_tab_mut() else {
            return false;
        };
        let Some(url) = usize::try_from(index).ok().and_then(|i| tab.history.get(i)).cloned() else {
            return false;
        };
        tab.history_index = index;
        tab.title = host_title(&url);
        tab.url = url;
        tab.view = BrowserView::Web;
        true
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Append a tab and make it active. Returns the new tab's ID.
    ///
    /// With a URL the tab opens on `web` with that URL as its only history
    /// entry; without one it opens on `home` (or the requested internal view)
    /// with empty history.
    fn create_tab(&mut self, url: Option<&str>, view: Option<BrowserView>) -> String {
        let tab = Self::new_tab(url, view);
        let id = tab.id.clone();
        log::debug!("tab {} created on {}", id, tab.view);
        self.tabs.push(tab);
        self.active_tab_id = Some(id.clone());
        id
    }

    /// Close a tab. If it was active, the tab that slid into its position
    /// becomes active (or the new last tab). Closing the only tab opens a
    /// fresh home tab. Returns false for an unknown ID.
    fn close_tab(&mut self, tab_id: &str) -> bool {
        let Some(removed_idx) = self.find_tab_index(tab_id) else {
            return false;
        };
        let was_active = self.active_tab_id.as_deref() == Some(tab_id);
        self.tabs.remove(removed_idx);
        log::debug!("tab {} closed", tab_id);

        if self.tabs.is_empty() {
            self.create_tab(None, None);
            return true;
        }

        if was_active {
            let next = removed_idx.min(self.tabs.len() - 1);
            self.active_tab_id = Some(self.tabs[next].id.clone());
        }
        true
    }

    fn switch_tab(&mut self, tab_id: &str) -> bool {
        if self.find_tab_index(tab_id).is_none() {
            return false;
        }
        self.active_tab_id = Some(tab_id.to_string());
        true
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Show a built-in surface in the active tab. URL and history are untouched.
    ///
    /// `Web` re-shows the entry under the cursor; with no entry it is refused.
    fn open_view(&mut self, view: BrowserView) -> bool {
        if view == BrowserView::Web {
            let Some(index) = self.get_active_tab().map(|t| t.history_index) else {
                return false;
            };
            return self.show_entry(index);
        }
        match self.active_tab_mut() {
            Some(tab) => {
                tab.view = view;
                true
            }
            None => false,
        }
    }

    /// Load `url` in the active tab, discarding any forward entries first.
    fn commit_navigation(&mut self, url: &str) -> bool {
        let Some(tab) = self.active_tab_mut() else {
            return false;
        };
        let keep = usize::try_from(tab.history_index + 1).unwrap_or(0);
        tab.history.truncate(keep);
        tab.history.push(url.to_string());
        tab.history_index = tab.history.len() as i64 - 1;
        tab.url = url.to_string();
        tab.title = host_title(url);
        tab.view = BrowserView::Web;
        true
    }

    /// Step back one entry. At the first entry (or before any navigation)
    /// the tab returns to the home surface with an empty URL instead.
    fn go_back(&mut self) -> bool {
        let Some(tab) = self.active_tab_mut() else {
            return false;
        };
        if tab.history_index <= 0 {
            tab.view = BrowserView::Home;
            tab.url.clear();
            tab.title = NEW_TAB_TITLE.to_string();
            return true;
        }
        let index = tab.history_index - 1;
        self.show_entry(index)
    }

    /// Step forward one entry; a no-op at the end of the history.
    fn go_forward(&mut self) -> bool {
        let Some(tab) = self.get_active_tab() else {
            return false;
        };
        if !tab.can_go_forward() {
            return false;
        }
        let index = tab.history_index + 1;
        self.show_entry(index)
    }
}
