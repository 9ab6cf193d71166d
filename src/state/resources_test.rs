use super::*;

use crate::storage::{MemoryBackend, StorageBackend};

fn u1() -> Identity {
    Identity::Known("u1".to_owned())
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut list = Vec::new();
    assert!(toggle_id(&mut list, "r1"));
    assert_eq!(list, vec!["r1".to_owned()]);
    assert!(!toggle_id(&mut list, "r1"));
    assert!(list.is_empty());
}

#[test]
fn toggle_preserves_other_entries() {
    let mut list = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    toggle_id(&mut list, "b");
    assert_eq!(list, vec!["a".to_owned(), "c".to_owned()]);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matches_title_case_insensitively() {
    let items = catalog();
    let hits = filter_resources(&items, "SQL", None);
    assert!(hits.iter().all(|i| i.title.to_lowercase().contains("sql")));
    assert!(!hits.is_empty());
}

#[test]
fn filter_by_category_only() {
    let items = catalog();
    let hits = filter_resources(&items, "", Some("career"));
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|i| i.category == "career"));
}

#[test]
fn filter_combines_query_and_category() {
    let items = catalog();
    let hits = filter_resources(&items, "resume", Some("career"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "resume-checklist");
}

#[test]
fn empty_filter_returns_everything() {
    let items = catalog();
    assert_eq!(filter_resources(&items, "  ", None).len(), items.len());
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn bookmarks_round_trip_per_identity() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();

    save_bookmarks(&store, &notifier, &u1(), &["r1".to_owned()]);
    assert_eq!(load_bookmarks(&store, &u1()), vec!["r1".to_owned()]);
    assert!(load_bookmarks(&store, &Identity::Anonymous).is_empty());
}

#[test]
fn legacy_bookmarks_migrate_on_load() {
    let backend = MemoryBackend::new();
    backend.set("resource-bookmarks", r#"["legacy"]"#).expect("seed legacy");

    let store = LocalStore::in_memory(backend.clone());
    assert_eq!(load_bookmarks(&store, &u1()), vec!["legacy".to_owned()]);
    assert!(!backend.contains("resource-bookmarks"));
    assert!(backend.contains("resource-bookmarks:u1"));
}

#[test]
fn completed_round_trips() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();

    save_completed(&store, &notifier, &u1(), &["r2".to_owned()]);
    assert_eq!(load_completed(&store, &u1()), vec!["r2".to_owned()]);
}
