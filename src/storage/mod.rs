//! Per-user namespaced persistence over the browser key-value store.
//!
//! DESIGN
//! ======
//! Every cached record lives under a `<kind>:<identity>` key so two accounts
//! on the same device never read each other's data. The store is a pure
//! function of (kind, identity, value): callers pass an explicit [`Identity`]
//! instead of reading a global "current user", which keeps the whole layer
//! testable without a simulated browser.
//!
//! ERROR HANDLING
//! ==============
//! Storage is a best-effort cache, not a durability guarantee. Reads degrade
//! to the caller's default on any failure (missing key, malformed JSON,
//! private-browsing denial); writes are logged and swallowed. In-memory state
//! stays authoritative for the session either way.

pub mod backend;
pub mod identity;
pub mod store;

pub use backend::{MemoryBackend, StorageBackend, StorageError};
pub use identity::Identity;
pub use store::{LocalStore, RecordKind, storage_key};

#[cfg(feature = "hydrate")]
pub use backend::BrowserBackend;
