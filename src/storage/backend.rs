//! Storage backends: the browser's localStorage and an in-memory stand-in.
//!
//! The trait seam exists so the store logic (key construction, migration,
//! JSON round-trips) runs natively under test with [`MemoryBackend`], while
//! hydrated builds talk to `web_sys::Storage` through [`BrowserBackend`].
//! Backends are `Send + Sync` so a store handle can live in Leptos context;
//! on the single-threaded WASM side the locks are uncontended.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

/// Failures surfaced by a storage backend.
///
/// Callers above the store boundary never see these; the store logs and
/// degrades instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying store cannot be reached (no window, privacy mode).
    #[error("storage unavailable")]
    Unavailable,
    /// The store refused a write (quota exceeded, access denied).
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

/// Minimal string key-value contract shared by all backends.
pub trait StorageBackend: Send + Sync {
    /// Read the raw string under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Delete `key` if present.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and non-browser builds.
///
/// Cloning shares the underlying map, so two store handles built from clones
/// of one `MemoryBackend` see each other's writes the way two views sharing
/// one localStorage would.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of live keys. Test hook for migration assertions.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Whether `key` currently holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// localStorage-backed implementation for hydrated builds.
///
/// Holds no JS handle of its own — the window is looked up per call, which
/// keeps the struct `Send + Sync` and makes each operation independently
/// tolerant of the store disappearing (privacy mode mid-session).
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserBackend;

#[cfg(feature = "hydrate")]
impl BrowserBackend {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Unavailable)
    }
}
