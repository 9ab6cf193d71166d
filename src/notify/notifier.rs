//! Topic-keyed observer registry with explicit subscription teardown.

#[cfg(test)]
#[path = "notifier_test.rs"]
mod notifier_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Change topics views can publish and subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Session started or ended; re-read the cached user.
    Auth,
    /// Settings or security flags changed.
    Settings,
    /// Profile bundle changed.
    Profile,
    /// Tutor history or stats changed.
    Tutor,
    /// Coding submissions or streak changed.
    Arena,
    /// Bookmarks or completed resources changed.
    Resources,
}

/// The topic a record kind publishes on. Local writes and cross-tab storage
/// events for the same kind converge here, so subscribers cannot (and need
/// not) tell the two sources apart.
pub fn topic_for(kind: crate::storage::RecordKind) -> Topic {
    use crate::storage::RecordKind;
    match kind {
        RecordKind::Settings | RecordKind::SecurityFlags => Topic::Settings,
        RecordKind::Profile => Topic::Profile,
        RecordKind::TutorHistory | RecordKind::TutorStats => Topic::Tutor,
        RecordKind::CodingStreak | RecordKind::CodingSubmissions => Topic::Arena,
        RecordKind::ResourceBookmarks | RecordKind::CompletedResources => Topic::Resources,
    }
}

/// Receipt returned by [`Notifier::subscribe`]; pass it back to
/// [`Notifier::unsubscribe`] on view teardown so handlers never leak.
#[derive(Debug)]
pub struct Subscription {
    topic: Topic,
    id: u64,
}

type Handler = Arc<dyn Fn() + Send + Sync>;

struct Entry {
    id: u64,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: HashMap<Topic, Vec<Entry>>,
}

/// Same-process, same-tab publish/subscribe.
///
/// Delivery is synchronous: every handler subscribed at the moment `notify`
/// is called runs exactly once before `notify` returns. Notifications are
/// fire-and-forget and lossy when nobody is subscribed — a view that mounts
/// later reads fresh data on its own mount.
#[derive(Default)]
pub struct Notifier {
    registry: Mutex<Registry>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `handler` for `topic` until the returned subscription is
    /// dropped via [`Self::unsubscribe`].
    pub fn subscribe(&self, topic: Topic, handler: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut registry = self.registry();
        registry.next_id += 1;
        let id = registry.next_id;
        registry
            .subscribers
            .entry(topic)
            .or_default()
            .push(Entry { id, handler: Arc::new(handler) });
        Subscription { topic, id }
    }

    /// Remove the handler behind `sub`. Unknown subscriptions are ignored,
    /// so double-unsubscribe on teardown is harmless.
    pub fn unsubscribe(&self, sub: &Subscription) {
        let mut registry = self.registry();
        if let Some(entries) = registry.subscribers.get_mut(&sub.topic) {
            entries.retain(|e| e.id != sub.id);
        }
    }

    /// Invoke every handler currently subscribed to `topic`.
    ///
    /// Handlers run against a snapshot taken before the first call and the
    /// lock is released first, so a handler may subscribe or unsubscribe
    /// re-entrantly without deadlock; additions take effect from the next
    /// notify.
    pub fn notify(&self, topic: Topic) {
        let snapshot: Vec<Handler> = self
            .registry()
            .subscribers
            .get(&topic)
            .map(|entries| entries.iter().map(|e| Arc::clone(&e.handler)).collect())
            .unwrap_or_default();
        for handler in snapshot {
            handler();
        }
    }

    /// Number of live subscriptions for `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.registry()
            .subscribers
            .get(&topic)
            .map_or(0, Vec::len)
    }
}
