use super::*;

// =============================================================
// MemoryBackend basics
// =============================================================

#[test]
fn memory_backend_get_missing_is_none() {
    let backend = MemoryBackend::new();
    assert_eq!(backend.get("nope").expect("get"), None);
    assert!(backend.is_empty());
}

#[test]
fn memory_backend_set_then_get_round_trips() {
    let backend = MemoryBackend::new();
    backend.set("k", "v").expect("set");
    assert_eq!(backend.get("k").expect("get"), Some("v".to_owned()));
    assert_eq!(backend.len(), 1);
}

#[test]
fn memory_backend_set_overwrites() {
    let backend = MemoryBackend::new();
    backend.set("k", "v1").expect("set");
    backend.set("k", "v2").expect("set");
    assert_eq!(backend.get("k").expect("get"), Some("v2".to_owned()));
    assert_eq!(backend.len(), 1);
}

#[test]
fn memory_backend_remove_is_idempotent() {
    let backend = MemoryBackend::new();
    backend.set("k", "v").expect("set");
    backend.remove("k").expect("remove");
    backend.remove("k").expect("remove again");
    assert!(!backend.contains("k"));
}

// =============================================================
// Clone sharing
// =============================================================

#[test]
fn cloned_backends_share_storage() {
    let backend = MemoryBackend::new();
    let other = backend.clone();
    backend.set("shared", "yes").expect("set");
    assert_eq!(other.get("shared").expect("get"), Some("yes".to_owned()));

    other.remove("shared").expect("remove");
    assert!(!backend.contains("shared"));
}
