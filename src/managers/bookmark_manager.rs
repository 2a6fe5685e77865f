//! Bookmark Manager for Groove.
//!
//! Bookmarks form a set keyed by URL, newest first.

use super::now_millis;
use crate::types::bookmark::Bookmark;

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn toggle_bookmark(&mut self, url: &str, title: &str) -> bool;
    fn remove_bookmark(&mut self, url: &str) -> bool;
    fn is_bookmarked(&self, url: &str) -> bool;
    fn list_bookmarks(&self) -> &[Bookmark];
    fn replace_all(&mut self, bookmarks: Vec<Bookmark>);
    fn clear(&mut self);
}

/// In-memory bookmark set.
#[derive(Debug, Default)]
pub struct BookmarkManager {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Adds the URL at the front if absent, removes it if present.
    /// Returns whether the URL is bookmarked afterwards.
    fn toggle_bookmark(&mut self, url: &str, title: &str) -> bool {
        if self.remove_bookmark(url) {
            return false;
        }
        self.bookmarks.insert(
            0,
            Bookmark {
                url: url.to_string(),
                title: title.to_string(),
                added: now_millis(),
            },
        );
        true
    }

    /// Removes every bookmark for the URL. Returns false if none existed.
    fn remove_bookmark(&mut self, url: &str) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.url != url);
        self.bookmarks.len() != before
    }

    fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Installs a persisted list, keeping the first occurrence of each URL.
    fn replace_all(&mut self, bookmarks: Vec<Bookmark>) {
        self.bookmarks.clear();
        for bookmark in bookmarks {
            if !self.is_bookmarked(&bookmark.url) {
                self.bookmarks.push(bookmark);
            }
        }
    }

    fn clear(&mut self) {
        self.bookmarks.clear();
    }
}
