use groove::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use groove::types::history::{HistoryEntry, HISTORY_CAP};

#[test]
fn test_record_visit_most_recent_first() {
    let mut mgr = HistoryManager::new();
    mgr.record_visit("https://a.com", "a.com");
    mgr.record_visit("https://b.com", "b.com");
    let urls: Vec<&str> = mgr.list_history().iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["https://b.com", "https://a.com"]);
}

#[test]
fn test_revisit_moves_entry_to_front() {
    let mut mgr = HistoryManager::new();
    mgr.record_visit("https://a.com", "a.com");
    mgr.record_visit("https://b.com", "b.com");
    mgr.record_visit("https://a.com", "a.com");
    let urls: Vec<&str> = mgr.list_history().iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
}

#[test]
fn test_history_is_capped() {
    let mut mgr = HistoryManager::new();
    for i in 0..HISTORY_CAP + 10 {
        mgr.record_visit(&format!("https://site{}.com", i), "site");
    }
    assert_eq!(mgr.list_history().len(), HISTORY_CAP);
    assert_eq!(
        mgr.list_history()[0].url,
        format!("https://site{}.com", HISTORY_CAP + 9)
    );
}

#[test]
fn test_recording_disabled() {
    let mut mgr = HistoryManager::new();
    mgr.set_recording_enabled(false);
    assert!(!mgr.is_recording_enabled());
    assert!(!mgr.record_visit("https://a.com", "a.com"));
    assert!(mgr.list_history().is_empty());
}

#[test]
fn test_recent_limits_count() {
    let mut mgr = HistoryManager::new();
    for i in 0..5 {
        mgr.record_visit(&format!("https://s{}.com", i), "s");
    }
    assert_eq!(mgr.recent(3).len(), 3);
    assert_eq!(mgr.recent(3)[0].url, "https://s4.com");
    assert_eq!(mgr.recent(100).len(), 5);
}

#[test]
fn test_delete_and_clear() {
    let mut mgr = HistoryManager::new();
    mgr.record_visit("https://a.com", "a.com");
    mgr.record_visit("https://b.com", "b.com");
    assert!(mgr.delete_entry("https://a.com"));
    assert!(!mgr.delete_entry("https://a.com"));
    assert_eq!(mgr.list_history().len(), 1);
    mgr.clear_all();
    assert!(mgr.list_history().is_empty());
}

#[test]
fn test_replace_all_reapplies_rules() {
    let mut mgr = HistoryManager::new();
    let mut entries: Vec<HistoryEntry> = (0..60)
        .map(|i| HistoryEntry {
            url: format!("https://s{}.com", i),
            title: "s".to_string(),
            timestamp: i,
        })
        .collect();
    let repeat = entries[0].clone();
    entries.insert(1, repeat);
    mgr.replace_all(entries);
    assert_eq!(mgr.list_history().len(), HISTORY_CAP);
    assert_eq!(mgr.list_history()[1].url, "https://s1.com");
}
