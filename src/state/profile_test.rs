use super::*;

use crate::net::types::ProfileResponse;
use crate::storage::MemoryBackend;

fn u1() -> Identity {
    Identity::Known("u1".to_owned())
}

fn server_profile() -> ProfileResponse {
    ProfileResponse {
        id: "u1".to_owned(),
        email: "server@example.com".to_owned(),
        name: "Server Name".to_owned(),
        role: "student".to_owned(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        avatar_url: Some("/uploads/avatar.png".to_owned()),
        profile_data: None,
        updated_at: None,
    }
}

// =============================================================
// Skills
// =============================================================

#[test]
fn add_skill_trims_and_deduplicates() {
    let mut bundle = ProfileBundle::default();
    assert!(bundle.add_skill("  rust  "));
    assert!(!bundle.add_skill("rust"));
    assert!(!bundle.add_skill("   "));
    assert_eq!(bundle.skills, vec!["rust".to_owned()]);
}

#[test]
fn remove_skill_only_removes_the_named_one() {
    let mut bundle = ProfileBundle::default();
    bundle.add_skill("rust");
    bundle.add_skill("sql");
    bundle.remove_skill("rust");
    assert_eq!(bundle.skills, vec!["sql".to_owned()]);
}

// =============================================================
// Reconciliation policy
// =============================================================

#[test]
fn server_wins_on_identity_fields() {
    let mut local = ProfileBundle {
        name: "Local Name".to_owned(),
        email: "local@example.com".to_owned(),
        ..ProfileBundle::default()
    };
    reconcile(&mut local, &server_profile(), &ReconcilePolicy::default());

    assert_eq!(local.name, "Server Name");
    assert_eq!(local.email, "server@example.com");
    assert_eq!(local.avatar_url, "/uploads/avatar.png");
}

#[test]
fn empty_server_identity_fields_never_blank_local_values() {
    let mut local = ProfileBundle { name: "Local Name".to_owned(), ..ProfileBundle::default() };
    let server = ProfileResponse { name: String::new(), ..server_profile() };
    reconcile(&mut local, &server, &ReconcilePolicy::default());
    assert_eq!(local.name, "Local Name");
}

#[test]
fn local_wins_policy_keeps_local_identity_fields() {
    let mut local = ProfileBundle { name: "Local Name".to_owned(), ..ProfileBundle::default() };
    let policy = ReconcilePolicy { name: FieldSource::LocalWins, ..ReconcilePolicy::default() };
    reconcile(&mut local, &server_profile(), &policy);
    assert_eq!(local.name, "Local Name");
}

#[test]
fn unsynced_local_edits_survive_a_fetch() {
    let mut local = ProfileBundle { bio: "local bio edit".to_owned(), ..ProfileBundle::default() };
    let server = ProfileResponse {
        profile_data: serde_json::to_value(ProfileBundle {
            bio: "server bio".to_owned(),
            location: "Berlin".to_owned(),
            ..ProfileBundle::default()
        })
        .ok(),
        ..server_profile()
    };
    reconcile(&mut local, &server, &ReconcilePolicy::default());

    // Dirty local field kept, blank local field seeded from the server.
    assert_eq!(local.bio, "local bio edit");
    assert_eq!(local.location, "Berlin");
}

#[test]
fn malformed_server_profile_data_is_ignored() {
    let mut local = ProfileBundle { bio: "kept".to_owned(), ..ProfileBundle::default() };
    let server = ProfileResponse {
        profile_data: Some(serde_json::json!("not an object")),
        ..server_profile()
    };
    reconcile(&mut local, &server, &ReconcilePolicy::default());
    assert_eq!(local.bio, "kept");
}

// =============================================================
// Optimistic save vs. backend failure
// =============================================================

#[test]
fn optimistic_write_survives_backend_failure() {
    let backend = MemoryBackend::new();
    let store = LocalStore::in_memory(backend.clone());
    let notifier = Notifier::new();

    let bundle = ProfileBundle { bio: "my new bio".to_owned(), ..ProfileBundle::default() };
    save_profile(&store, &notifier, &u1(), &bundle);

    // Backend rejects the push; a toast appears, the local record stands.
    let mut toasts = ToastsState::default();
    apply_push_outcome(&mut toasts, &Err("500 internal".to_owned()));

    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].level, crate::state::toasts::ToastLevel::Error);

    let reloaded = load_profile(&store, &u1());
    assert_eq!(reloaded.bio, "my new bio");
}

#[test]
fn successful_push_confirms_with_a_toast() {
    let mut toasts = ToastsState::default();
    apply_push_outcome(&mut toasts, &Ok(()));
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].level, crate::state::toasts::ToastLevel::Success);
}

#[test]
fn save_profile_publishes_the_profile_topic() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let _sub = notifier.subscribe(Topic::Profile, move || {
        c.fetch_add(1, Ordering::SeqCst);
    });

    save_profile(&store, &notifier, &u1(), &ProfileBundle::default());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
