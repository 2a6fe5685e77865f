use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Title shown for a tab that has no URL.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// The surface a tab is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowserView {
    Home,
    Web,
    Settings,
    Privacy,
    Inspect,
    Downloads,
    ReadingList,
    History,
    Bookmarks,
}

impl BrowserView {
    /// Views reachable through the internal scheme. `Web` is not one of them.
    pub const INTERNAL: [BrowserView; 8] = [
        BrowserView::Home,
        BrowserView::Settings,
        BrowserView::Privacy,
        BrowserView::Inspect,
        BrowserView::Downloads,
        BrowserView::ReadingList,
        BrowserView::History,
        BrowserView::Bookmarks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserView::Home => "home",
            BrowserView::Web => "web",
            BrowserView::Settings => "settings",
            BrowserView::Privacy => "privacy",
            BrowserView::Inspect => "inspect",
            BrowserView::Downloads => "downloads",
            BrowserView::ReadingList => "reading-list",
            BrowserView::History => "history",
            BrowserView::Bookmarks => "bookmarks",
        }
    }
}

impl fmt::Display for BrowserView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(BrowserView::Home),
            "web" => Ok(BrowserView::Web),
            "settings" => Ok(BrowserView::Settings),
            "privacy" => Ok(BrowserView::Privacy),
            "inspect" => Ok(BrowserView::Inspect),
            "downloads" => Ok(BrowserView::Downloads),
            "reading-list" => Ok(BrowserView::ReadingList),
            "history" => Ok(BrowserView::History),
            "bookmarks" => Ok(BrowserView::Bookmarks),
            other => Err(format!("unknown view: {}", other)),
        }
    }
}

/// One browsing context with its own back/forward stack.
///
/// `history_index` is `-1` until the first navigation; otherwise it points
/// into `history`, and `url == history[history_index]` whenever `view` is `Web`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub view: BrowserView,
    pub history: Vec<String>,
    pub history_index: i64,
}

impl Tab {
    /// Entry under the cursor, if any.
    pub fn current_entry(&self) -> Option<&str> {
        usize::try_from(self.history_index)
            .ok()
            .and_then(|i| self.history.get(i))
            .map(String::as_str)
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len() as i64
    }
}
