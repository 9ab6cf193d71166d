//! Security flags record and password-change validation.
//!
//! Validation runs entirely client-side before any network call; failures
//! surface inline on the form, never as toasts.

#[cfg(test)]
#[path = "security_test.rs"]
mod security_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::{Notifier, Topic};
use crate::storage::{Identity, LocalStore, RecordKind};

/// Per-user security toggles (the `security-flags` record kind).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityFlags {
    pub two_factor: bool,
    pub biometric_unlock: bool,
    pub session_alerts: bool,
}

impl Default for SecurityFlags {
    fn default() -> Self {
        Self {
            two_factor: false,
            biometric_unlock: false,
            session_alerts: true,
        }
    }
}

pub fn load_security(store: &LocalStore, identity: &Identity) -> SecurityFlags {
    store.load(RecordKind::SecurityFlags, identity, SecurityFlags::default())
}

pub fn save_security(
    store: &LocalStore,
    notifier: &Notifier,
    identity: &Identity,
    flags: &SecurityFlags,
) {
    store.save(RecordKind::SecurityFlags, identity, flags);
    notifier.notify(Topic::Settings);
}

/// Why a password change was rejected before reaching the backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Please enter your current password")]
    MissingCurrent,
    #[error("New password must be at least 8 characters")]
    TooShort,
    #[error("Passwords do not match")]
    Mismatch,
}

/// Validate a password-change form.
///
/// # Errors
///
/// Returns the first failed check in form order: current password present,
/// minimum length, confirmation match.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), PasswordError> {
    if current.is_empty() {
        return Err(PasswordError::MissingCurrent);
    }
    if new.len() < 8 {
        return Err(PasswordError::TooShort);
    }
    if new != confirm {
        return Err(PasswordError::Mismatch);
    }
    Ok(())
}

/// Score a password 0–100: 25 points each for length ≥ 8, mixed case,
/// a digit, and a symbol.
pub fn password_strength(password: &str) -> u8 {
    let mut strength = 0;
    if password.len() >= 8 {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 25;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 25;
    }
    strength
}
