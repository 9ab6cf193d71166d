//! Coding arena state: local submission history and the cached streak.
//!
//! The streak itself is computed server-side on a daily cadence; the client
//! caches the display value under `coding-streak` so the arena renders a
//! number immediately on mount and reconciles once the stats fetch lands.

#[cfg(test)]
#[path = "arena_test.rs"]
mod arena_test;

use serde::{Deserialize, Serialize};

use crate::net::types::CodeEvaluation;
use crate::notify::{Notifier, Topic};
use crate::storage::{Identity, LocalStore, RecordKind};

/// Local submission history cap (newest first).
pub const SUBMISSION_CAP: usize = 50;

/// One locally recorded evaluation result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub problem_id: String,
    pub language: String,
    pub score: i32,
    pub passed: bool,
    /// Milliseconds since epoch, as the browser reports it.
    pub ts: f64,
}

impl SubmissionRecord {
    pub fn from_evaluation(eval: &CodeEvaluation, ts: f64) -> Self {
        Self {
            problem_id: eval.problem_id.clone(),
            language: eval.language.clone(),
            score: eval.score,
            passed: eval.passed,
            ts,
        }
    }
}

pub fn load_submissions(store: &LocalStore, identity: &Identity) -> Vec<SubmissionRecord> {
    store.load(RecordKind::CodingSubmissions, identity, Vec::new())
}

/// Prepend `record`, trim to [`SUBMISSION_CAP`], persist, and announce.
pub fn record_submission(
    store: &LocalStore,
    notifier: &Notifier,
    identity: &Identity,
    submissions: &mut Vec<SubmissionRecord>,
    record: SubmissionRecord,
) {
    submissions.insert(0, record);
    submissions.truncate(SUBMISSION_CAP);
    store.save(RecordKind::CodingSubmissions, identity, submissions);
    notifier.notify(Topic::Arena);
}

pub fn load_streak(store: &LocalStore, identity: &Identity) -> u32 {
    store.load(RecordKind::CodingStreak, identity, 0)
}

/// Cache the server's display streak and announce when it moved.
pub fn cache_streak(
    store: &LocalStore,
    notifier: &Notifier,
    identity: &Identity,
    previous: u32,
    streak: u32,
) {
    store.save(RecordKind::CodingStreak, identity, &streak);
    if streak != previous {
        notifier.notify(Topic::Arena);
    }
}
