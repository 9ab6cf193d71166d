//! Identity values used to namespace storage keys.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use crate::net::types::User;

/// Key segment used when no authenticated user is present.
pub const ANONYMOUS: &str = "anonymous";

/// A stable per-user namespace for storage keys.
///
/// Derived from the authenticated user's id, falling back to email when the
/// id is blank. Unauthenticated sessions collapse to [`Identity::Anonymous`]
/// so every storage operation still has a working key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Known(String),
}

impl Identity {
    /// Derive the identity for `user`, if any.
    pub fn from_user(user: Option<&User>) -> Self {
        match user {
            Some(u) if !u.id.trim().is_empty() => Self::Known(u.id.clone()),
            Some(u) if !u.email.trim().is_empty() => Self::Known(u.email.clone()),
            _ => Self::Anonymous,
        }
    }

    /// The key segment this identity renders as.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Anonymous => ANONYMOUS,
            Self::Known(id) => id,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Identity {
    fn from(id: &str) -> Self {
        if id.trim().is_empty() {
            Self::Anonymous
        } else {
            Self::Known(id.to_owned())
        }
    }
}
