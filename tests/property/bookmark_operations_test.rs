//! Property-based tests for Bookmark Manager operations.
//!
//! Bookmarks behave as a set keyed by URL: toggling never produces a
//! duplicate, and toggling the same URL twice restores the previous set.

use std::collections::HashSet;

use groove::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use proptest::prelude::*;

/// Strategy for generating valid URL strings from a small host pool so
/// toggles collide often.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-c]{1,2}",
        prop_oneof![Just(".com"), Just(".org")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}://{}{}", scheme, host, tld))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn toggles_never_duplicate(urls in prop::collection::vec(arb_url(), 1..40)) {
        let mut manager = BookmarkManager::new();
        let mut model: HashSet<String> = HashSet::new();

        for url in &urls {
            let now = manager.toggle_bookmark(url, "title");
            if !model.remove(url) {
                model.insert(url.clone());
            }
            prop_assert_eq!(now, model.contains(url));
        }

        let listed: Vec<&str> = manager.list_bookmarks().iter().map(|b| b.url.as_str()).collect();
        let unique: HashSet<&str> = listed.iter().copied().collect();
        prop_assert_eq!(listed.len(), unique.len());
        prop_assert_eq!(unique.len(), model.len());
        for url in &model {
            prop_assert!(manager.is_bookmarked(url));
        }
    }

    #[test]
    fn toggle_twice_restores_set(
        seed in prop::collection::vec(arb_url(), 0..10),
        url in arb_url(),
    ) {
        let mut manager = BookmarkManager::new();
        for u in &seed {
            if !manager.is_bookmarked(u) {
                manager.toggle_bookmark(u, "seed");
            }
        }
        let before: HashSet<String> =
            manager.list_bookmarks().iter().map(|b| b.url.clone()).collect();

        manager.toggle_bookmark(&url, "x");
        manager.toggle_bookmark(&url, "x");

        let after: HashSet<String> =
            manager.list_bookmarks().iter().map(|b| b.url.clone()).collect();
        prop_assert_eq!(before, after);
    }
}
