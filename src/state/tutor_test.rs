use super::*;

use crate::storage::{MemoryBackend, StorageBackend};

fn u1() -> Identity {
    Identity::Known("u1".to_owned())
}

fn message(i: usize) -> TutorMessage {
    TutorMessage {
        id: format!("m-{i}"),
        role: if i % 2 == 0 { MessageRole::User } else { MessageRole::Assistant },
        content: format!("message {i}"),
        ts: i as f64,
    }
}

// =============================================================
// History persistence
// =============================================================

#[test]
fn history_round_trips() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();
    let messages = vec![message(0), message(1)];

    persist_history(&store, &notifier, &u1(), &messages);
    assert_eq!(load_history(&store, &u1()), messages);
}

#[test]
fn history_is_capped_to_the_most_recent_messages() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();
    let messages: Vec<TutorMessage> = (0..HISTORY_CAP + 10).map(message).collect();

    persist_history(&store, &notifier, &u1(), &messages);
    let loaded = load_history(&store, &u1());

    assert_eq!(loaded.len(), HISTORY_CAP);
    // The oldest ten fell off the front.
    assert_eq!(loaded[0].id, "m-10");
    assert_eq!(loaded[HISTORY_CAP - 1].id, format!("m-{}", HISTORY_CAP + 9));
}

#[test]
fn clear_history_leaves_no_record() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();
    persist_history(&store, &notifier, &u1(), &[message(0)]);

    clear_history(&store, &notifier, &u1());
    assert!(load_history(&store, &u1()).is_empty());
}

#[test]
fn legacy_history_migrates() {
    let backend = MemoryBackend::new();
    backend
        .set(
            "tutor-history",
            r#"[{"id":"m-0","role":"user","content":"hi","ts":1.0}]"#,
        )
        .expect("seed legacy");

    let store = LocalStore::in_memory(backend.clone());
    let loaded = load_history(&store, &u1());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].role, MessageRole::User);
    assert!(!backend.contains("tutor-history"));
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_round_trip() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let stats = TutorStats { questions_asked: 4, topics_explored: 2, session_seconds: 90 };

    save_stats(&store, &u1(), &stats);
    assert_eq!(load_stats(&store, &u1()), stats);
}

#[test]
fn missing_stats_default_to_zero() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    assert_eq!(load_stats(&store, &u1()), TutorStats::default());
}
