//! The namespaced local store: key construction, load/save, legacy migration.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::backend::{MemoryBackend, StorageBackend};
use super::identity::Identity;

/// The kinds of records this client persists per user.
///
/// The string form doubles as the legacy (pre-namespacing) key for the
/// one-time migration path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Settings,
    Profile,
    TutorHistory,
    TutorStats,
    CodingStreak,
    CodingSubmissions,
    ResourceBookmarks,
    CompletedResources,
    SecurityFlags,
}

impl RecordKind {
    pub const ALL: [Self; 9] = [
        Self::Settings,
        Self::Profile,
        Self::TutorHistory,
        Self::TutorStats,
        Self::CodingStreak,
        Self::CodingSubmissions,
        Self::ResourceBookmarks,
        Self::CompletedResources,
        Self::SecurityFlags,
    ];

    /// Recover the kind from a storage key (`<kind>:<identity>` or the bare
    /// legacy `<kind>`). Used to map cross-tab storage events onto topics.
    pub fn from_key(key: &str) -> Option<Self> {
        let prefix = key.split(':').next().unwrap_or(key);
        Self::ALL.into_iter().find(|k| k.as_str() == prefix)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Profile => "profile",
            Self::TutorHistory => "tutor-history",
            Self::TutorStats => "tutor-stats",
            Self::CodingStreak => "coding-streak",
            Self::CodingSubmissions => "coding-submissions",
            Self::ResourceBookmarks => "resource-bookmarks",
            Self::CompletedResources => "completed-resources",
            Self::SecurityFlags => "security-flags",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic `<kind>:<identity>` key for a record.
pub fn storage_key(kind: RecordKind, identity: &Identity) -> String {
    format!("{}:{}", kind.as_str(), identity.as_str())
}

/// Handle over a [`StorageBackend`] with JSON (de)serialization, silent
/// degradation, and the legacy-key migration baked into `load`.
pub struct LocalStore {
    backend: Box<dyn StorageBackend>,
}

impl LocalStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self { backend: Box::new(backend) }
    }

    /// Store backed by the browser's localStorage when hydrated; falls back
    /// to an in-memory map elsewhere so SSR renders never touch a window.
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(super::backend::BrowserBackend)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(MemoryBackend::new())
        }
    }

    /// In-memory store for tests and native tooling.
    pub fn in_memory(backend: MemoryBackend) -> Self {
        Self::new(backend)
    }

    /// Load the record for `(kind, identity)`, or `default`.
    ///
    /// Missing key, unreadable storage, and malformed JSON all return
    /// `default`. When only the legacy shared `<kind>` key exists, its value
    /// is migrated into the namespaced key first (see [`Self::save`] for the
    /// write half of the convention).
    pub fn load<T: DeserializeOwned>(&self, kind: RecordKind, identity: &Identity, default: T) -> T {
        let Some(raw) = self.read_or_migrate(kind, identity) else {
            return default;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                leptos::logging::warn!("discarding malformed {kind} record: {e}");
                default
            }
        }
    }

    /// Serialize `value` and write it under the namespaced key.
    ///
    /// Always a full-bundle rewrite; failures are logged, never surfaced.
    pub fn save<T: Serialize + ?Sized>(&self, kind: RecordKind, identity: &Identity, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("could not serialize {kind} record: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(&storage_key(kind, identity), &raw) {
            leptos::logging::warn!("could not persist {kind} record: {e}");
        }
    }

    /// Delete the record for `(kind, identity)`. Best-effort like `save`.
    pub fn remove(&self, kind: RecordKind, identity: &Identity) {
        if let Err(e) = self.backend.remove(&storage_key(kind, identity)) {
            leptos::logging::warn!("could not remove {kind} record: {e}");
        }
    }

    /// Read the namespaced key, falling back to a one-time legacy migration.
    ///
    /// Namespaced data always wins: the legacy key is only consulted when the
    /// namespaced key is absent, so running this twice is a no-op the second
    /// time. If the copy fails the legacy key is left in place for a later
    /// retry, but the value is still served.
    fn read_or_migrate(&self, kind: RecordKind, identity: &Identity) -> Option<String> {
        let key = storage_key(kind, identity);
        match self.backend.get(&key) {
            Ok(Some(raw)) => return Some(raw),
            Ok(None) => {}
            Err(e) => {
                leptos::logging::warn!("could not read {kind} record: {e}");
                return None;
            }
        }

        let legacy_key = kind.as_str();
        match self.backend.get(legacy_key) {
            Ok(Some(raw)) => {
                if self.backend.set(&key, &raw).is_ok() {
                    if let Err(e) = self.backend.remove(legacy_key) {
                        leptos::logging::warn!("could not delete legacy {kind} key: {e}");
                    }
                }
                Some(raw)
            }
            Ok(None) => None,
            Err(e) => {
                leptos::logging::warn!("could not read legacy {kind} key: {e}");
                None
            }
        }
    }
}
