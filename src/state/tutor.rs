//! AI tutor chat state: rolling transcript and session stats.

#[cfg(test)]
#[path = "tutor_test.rs"]
mod tutor_test;

use serde::{Deserialize, Serialize};

use crate::notify::{Notifier, Topic};
use crate::storage::{Identity, LocalStore, RecordKind};

/// Only the most recent messages are persisted; the full in-memory thread
/// can grow past this during a session.
pub const HISTORY_CAP: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One message in the tutor transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TutorMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    /// Milliseconds since epoch, as the browser reports it.
    pub ts: f64,
}

/// Session counters shown in the tutor sidebar (the `tutor-stats` record).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorStats {
    pub questions_asked: u32,
    pub topics_explored: u32,
    pub session_seconds: u64,
}

pub fn load_history(store: &LocalStore, identity: &Identity) -> Vec<TutorMessage> {
    store.load(RecordKind::TutorHistory, identity, Vec::new())
}

/// Persist the transcript, keeping only the last [`HISTORY_CAP`] messages,
/// and announce the change.
pub fn persist_history(
    store: &LocalStore,
    notifier: &Notifier,
    identity: &Identity,
    messages: &[TutorMessage],
) {
    let start = messages.len().saturating_sub(HISTORY_CAP);
    store.save(RecordKind::TutorHistory, identity, &messages[start..]);
    notifier.notify(Topic::Tutor);
}

/// Drop the persisted transcript (the "clear chat" action).
pub fn clear_history(store: &LocalStore, notifier: &Notifier, identity: &Identity) {
    store.remove(RecordKind::TutorHistory, identity);
    notifier.notify(Topic::Tutor);
}

pub fn load_stats(store: &LocalStore, identity: &Identity) -> TutorStats {
    store.load(RecordKind::TutorStats, identity, TutorStats::default())
}

pub fn save_stats(store: &LocalStore, identity: &Identity, stats: &TutorStats) {
    store.save(RecordKind::TutorStats, identity, stats);
}
