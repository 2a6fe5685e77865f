use groove::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use groove::types::bookmark::Bookmark;

fn bookmark(url: &str, added: i64) -> Bookmark {
    Bookmark {
        url: url.to_string(),
        title: url.to_string(),
        added,
    }
}

#[test]
fn test_toggle_adds_then_removes() {
    let mut mgr = BookmarkManager::new();
    assert!(mgr.toggle_bookmark("https://github.com", "github.com"));
    assert!(mgr.is_bookmarked("https://github.com"));
    assert_eq!(mgr.list_bookmarks().len(), 1);

    assert!(!mgr.toggle_bookmark("https://github.com", "github.com"));
    assert!(!mgr.is_bookmarked("https://github.com"));
    assert!(mgr.list_bookmarks().is_empty());
}

#[test]
fn test_newest_bookmark_first() {
    let mut mgr = BookmarkManager::new();
    mgr.toggle_bookmark("https://a.com", "a.com");
    mgr.toggle_bookmark("https://b.com", "b.com");
    let urls: Vec<&str> = mgr.list_bookmarks().iter().map(|b| b.url.as_str()).collect();
    assert_eq!(urls, vec!["https://b.com", "https://a.com"]);
}

#[test]
fn test_bookmark_records_title_and_time() {
    let mut mgr = BookmarkManager::new();
    mgr.toggle_bookmark("https://docs.rs", "docs.rs");
    let b = &mgr.list_bookmarks()[0];
    assert_eq!(b.title, "docs.rs");
    assert!(b.added > 0);
}

#[test]
fn test_remove_bookmark() {
    let mut mgr = BookmarkManager::new();
    mgr.toggle_bookmark("https://a.com", "a.com");
    assert!(mgr.remove_bookmark("https://a.com"));
    assert!(!mgr.remove_bookmark("https://a.com"));
}

#[test]
fn test_replace_all_drops_duplicate_urls() {
    let mut mgr = BookmarkManager::new();
    mgr.replace_all(vec![
        bookmark("https://a.com", 3),
        bookmark("https://b.com", 2),
        bookmark("https://a.com", 1),
    ]);
    assert_eq!(mgr.list_bookmarks().len(), 2);
    assert_eq!(mgr.list_bookmarks()[0].added, 3);
}

#[test]
fn test_clear() {
    let mut mgr = BookmarkManager::new();
    mgr.toggle_bookmark("https://a.com", "a.com");
    mgr.clear();
    assert!(mgr.list_bookmarks().is_empty());
}
