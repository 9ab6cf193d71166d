//! The profile bundle, its reconciliation policy, and owner operations.
//!
//! DESIGN
//! ======
//! Edits apply optimistically: the bundle saves to the namespaced store and
//! publishes [`Topic::Profile`] before (and regardless of) the backend PUT.
//! Reconciliation with the server is an explicit per-field policy rather than
//! fetch-ordering luck: identity-bearing fields (name, email, avatar) are
//! server-wins whenever the server returns a value, everything else is
//! local-wins until the next successful push. The local cache is allowed to
//! diverge from the server between pushes.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{ProfileResponse, ProfileUpdate};
use crate::notify::{Notifier, Topic};
use crate::state::toasts::ToastsState;
use crate::storage::{Identity, LocalStore, RecordKind};

/// Flat per-user profile document (the `profile` record kind).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileBundle {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub title: String,
    pub company: String,
    pub university: String,
    pub graduation_year: String,
    pub skills: Vec<String>,
    pub github: String,
    pub linkedin: String,
    pub portfolio: String,
}

impl ProfileBundle {
    /// Add a skill if non-blank and not already present. Returns whether the
    /// list changed.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_owned());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    /// Body for the best-effort backend push.
    pub fn as_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: Some(self.name.clone()),
            profile_data: serde_json::to_value(self).ok(),
        }
    }
}

/// Which side wins for a reconciled field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSource {
    ServerWins,
    LocalWins,
}

/// Per-field reconciliation policy for identity-bearing fields.
///
/// The default matches the platform convention: the authenticated identity is
/// authoritative for who the user *is*; the local cache is authoritative for
/// what the user *typed* until it syncs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconcilePolicy {
    pub name: FieldSource,
    pub email: FieldSource,
    pub avatar_url: FieldSource,
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self {
            name: FieldSource::ServerWins,
            email: FieldSource::ServerWins,
            avatar_url: FieldSource::ServerWins,
        }
    }
}

fn apply_field(slot: &mut String, server_value: &str, source: FieldSource) {
    if source == FieldSource::ServerWins && !server_value.is_empty() {
        *slot = server_value.to_owned();
    }
}

/// Fold a fresh server fetch into the locally cached bundle.
///
/// Identity fields follow `policy`; the remaining fields are filled from the
/// server's stored document only where the local value is still blank, so
/// unsynced local edits survive a fetch.
pub fn reconcile(local: &mut ProfileBundle, server: &ProfileResponse, policy: &ReconcilePolicy) {
    apply_field(&mut local.name, &server.name, policy.name);
    apply_field(&mut local.email, &server.email, policy.email);
    if let Some(avatar) = &server.avatar_url {
        apply_field(&mut local.avatar_url, avatar, policy.avatar_url);
    }

    let Some(data) = &server.profile_data else {
        return;
    };
    let Ok(remote) = serde_json::from_value::<ProfileBundle>(data.clone()) else {
        return;
    };
    fill_if_blank(&mut local.phone, remote.phone);
    fill_if_blank(&mut local.location, remote.location);
    fill_if_blank(&mut local.bio, remote.bio);
    fill_if_blank(&mut local.title, remote.title);
    fill_if_blank(&mut local.company, remote.company);
    fill_if_blank(&mut local.university, remote.university);
    fill_if_blank(&mut local.graduation_year, remote.graduation_year);
    fill_if_blank(&mut local.github, remote.github);
    fill_if_blank(&mut local.linkedin, remote.linkedin);
    fill_if_blank(&mut local.portfolio, remote.portfolio);
    if local.skills.is_empty() {
        local.skills = remote.skills;
    }
}

fn fill_if_blank(slot: &mut String, remote: String) {
    if slot.is_empty() && !remote.is_empty() {
        *slot = remote;
    }
}

/// Load the cached bundle for `identity`.
pub fn load_profile(store: &LocalStore, identity: &Identity) -> ProfileBundle {
    store.load(RecordKind::Profile, identity, ProfileBundle::default())
}

/// Optimistically persist the bundle and announce the change. Runs before
/// any backend push and regardless of its outcome.
pub fn save_profile(
    store: &LocalStore,
    notifier: &Notifier,
    identity: &Identity,
    bundle: &ProfileBundle,
) {
    store.save(RecordKind::Profile, identity, bundle);
    notifier.notify(Topic::Profile);
}

/// Report the outcome of the backend push.
///
/// Failure produces a toast and nothing else: the local record written by
/// [`save_profile`] stands until the next successful sync.
pub fn apply_push_outcome(toasts: &mut ToastsState, result: &Result<(), String>) {
    match result {
        Ok(()) => toasts.success("Profile updated"),
        Err(e) => toasts.error(format!("Profile sync failed: {e}")),
    }
}
