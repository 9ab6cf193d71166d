use super::*;

use crate::storage::MemoryBackend;

fn u1() -> Identity {
    Identity::Known("u1".to_owned())
}

fn record(problem: &str, ts: f64) -> SubmissionRecord {
    SubmissionRecord {
        problem_id: problem.to_owned(),
        language: "python".to_owned(),
        score: 80,
        passed: true,
        ts,
    }
}

// =============================================================
// Submission history
// =============================================================

#[test]
fn submissions_prepend_newest_first() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();
    let mut list = Vec::new();

    record_submission(&store, &notifier, &u1(), &mut list, record("two-sum", 1.0));
    record_submission(&store, &notifier, &u1(), &mut list, record("lru-cache", 2.0));

    assert_eq!(list[0].problem_id, "lru-cache");
    assert_eq!(load_submissions(&store, &u1()), list);
}

#[test]
fn submissions_are_capped() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();
    let mut list = Vec::new();

    for i in 0..SUBMISSION_CAP + 5 {
        record_submission(&store, &notifier, &u1(), &mut list, record("p", i as f64));
    }

    assert_eq!(list.len(), SUBMISSION_CAP);
    // Newest kept, oldest dropped.
    assert_eq!(list[0].ts, (SUBMISSION_CAP + 4) as f64);
    assert_eq!(load_submissions(&store, &u1()).len(), SUBMISSION_CAP);
}

#[test]
fn from_evaluation_copies_the_scored_fields() {
    let eval = crate::net::types::CodeEvaluation {
        id: "e1".to_owned(),
        problem_id: "two-sum".to_owned(),
        language: "rust".to_owned(),
        evaluation: "looks good".to_owned(),
        passed: true,
        suggestions: String::new(),
        score: 92,
        created_at: String::new(),
    };
    let rec = SubmissionRecord::from_evaluation(&eval, 5.0);
    assert_eq!(rec.problem_id, "two-sum");
    assert_eq!(rec.language, "rust");
    assert_eq!(rec.score, 92);
    assert!(rec.passed);
    assert_eq!(rec.ts, 5.0);
}

// =============================================================
// Streak cache
// =============================================================

#[test]
fn streak_round_trips() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();

    cache_streak(&store, &notifier, &u1(), 0, 6);
    assert_eq!(load_streak(&store, &u1()), 6);
}

#[test]
fn streak_change_publishes_the_arena_topic() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let _sub = notifier.subscribe(Topic::Arena, move || {
        c.fetch_add(1, Ordering::SeqCst);
    });

    cache_streak(&store, &notifier, &u1(), 3, 4);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    // Unchanged value refreshes the cache silently.
    cache_streak(&store, &notifier, &u1(), 4, 4);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_streak_defaults_to_zero() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    assert_eq!(load_streak(&store, &u1()), 0);
}
