use groove::managers::reading_list_manager::ReadingListManager;
use groove::types::reading_list::{ReadingListAdd, ReadingListEntry};

#[test]
fn test_add_then_duplicate() {
    let mut list = ReadingListManager::new();
    assert_eq!(list.add("https://blog.rust-lang.org", "blog.rust-lang.org"), ReadingListAdd::Added);
    assert_eq!(
        list.add("https://blog.rust-lang.org", "blog.rust-lang.org"),
        ReadingListAdd::AlreadyPresent
    );
    assert_eq!(list.list().len(), 1);
    assert!(list.contains("https://blog.rust-lang.org"));
}

#[test]
fn test_newest_first_with_unique_ids() {
    let mut list = ReadingListManager::new();
    list.add("https://a.com", "a.com");
    list.add("https://b.com", "b.com");
    let entries = list.list();
    assert_eq!(entries[0].url, "https://b.com");
    assert_ne!(entries[0].id, entries[1].id);
}

#[test]
fn test_remove_by_id() {
    let mut list = ReadingListManager::new();
    list.add("https://a.com", "a.com");
    let id = list.list()[0].id.clone();
    assert!(list.remove(&id));
    assert!(!list.remove(&id));
    assert!(list.list().is_empty());
}

#[test]
fn test_replace_all_dedups_by_url() {
    let mut list = ReadingListManager::new();
    let entry = |id: &str, url: &str| ReadingListEntry {
        id: id.to_string(),
        url: url.to_string(),
        title: url.to_string(),
        timestamp: 0,
    };
    list.replace_all(vec![
        entry("1", "https://a.com"),
        entry("2", "https://a.com"),
        entry("3", "https://b.com"),
    ]);
    assert_eq!(list.list().len(), 2);
    assert_eq!(list.list()[0].id, "1");
    list.clear();
    assert!(list.list().is_empty());
}

#[test]
fn test_add_outcome_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&ReadingListAdd::AlreadyPresent).unwrap(),
        "\"already_present\""
    );
}
