//! Authentication state and the browser session cache.
//!
//! The token and user object live under the plain `token`/`user` keys — they
//! are session artifacts shared with the pre-namespacing era, not namespaced
//! records, and they are what the namespaced [`Identity`] is derived from.
//!
//! Every accessor tolerates an unavailable or corrupted store: a broken
//! cache reads as "not signed in", never as an error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::storage::Identity;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "user";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// The storage identity for the current session.
    pub fn identity(&self) -> Identity {
        Identity::from_user(self.user.as_ref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persist the bearer token and user object after a successful login.
pub fn cache_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// The cached bearer token, if a session exists.
pub fn cached_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// The cached user object, if a session exists and the cache parses.
pub fn cached_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage().and_then(|s| s.get_item(USER_KEY).ok().flatten())?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Drop the cached session. Namespaced records are left in place so the
/// account's data is still there on the next sign-in.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
