//! The settings bundle: defaults, merge-over-defaults load, owner operations.
//!
//! DESIGN
//! ======
//! Settings persist as one JSON document per user (full rewrite on every
//! save). Loading merges the stored document over the default bundle with an
//! explicit recursive rule: loaded values override defaults per leaf, missing
//! leaves keep their defaults, and whole categories are never dropped by a
//! partial document. Every edit saves synchronously and then publishes
//! [`Topic::Settings`] so concurrently mounted views re-read.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::notify::{Notifier, Topic};
use crate::storage::{Identity, LocalStore, RecordKind};

/// Nested category → setting → value bundle, mirroring the settings page
/// tabs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsBundle {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub preferences: PreferenceSettings,
    pub learning: LearningSettings,
    pub accessibility: AccessibilitySettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub achievements: bool,
    pub reminders: bool,
    pub weekly_report: bool,
    pub new_features: bool,
    pub marketing: bool,
    pub sound: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            achievements: true,
            reminders: true,
            weekly_report: true,
            new_features: false,
            marketing: false,
            sound: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacySettings {
    pub profile_visible: bool,
    pub show_progress: bool,
    pub show_achievements: bool,
    pub show_activity: bool,
    pub allow_messages: bool,
    pub share_data: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visible: true,
            show_progress: true,
            show_achievements: true,
            show_activity: true,
            allow_messages: true,
            share_data: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSettings {
    pub theme: String,
    pub language: String,
    pub timezone: String,
    pub date_format: String,
    pub code_editor: String,
    pub font_size: String,
    pub auto_save: bool,
    pub compact_mode: bool,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_owned(),
            language: "en".to_owned(),
            timezone: "auto".to_owned(),
            date_format: "MM/DD/YYYY".to_owned(),
            code_editor: "monaco".to_owned(),
            font_size: "medium".to_owned(),
            auto_save: true,
            compact_mode: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningSettings {
    pub daily_goal: u32,
    pub difficulty: String,
    pub reminder_time: String,
    pub weekend_reminders: bool,
    pub streak_notifications: bool,
}

impl Default for LearningSettings {
    fn default() -> Self {
        Self {
            daily_goal: 30,
            difficulty: "medium".to_owned(),
            reminder_time: "09:00".to_owned(),
            weekend_reminders: false,
            streak_notifications: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    pub reduce_motion: bool,
    pub high_contrast: bool,
    pub screen_reader: bool,
    pub keyboard_nav: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            high_contrast: false,
            screen_reader: false,
            keyboard_nav: true,
        }
    }
}

/// Recursively merge `loaded` into `base`.
///
/// Rule: objects merge key-by-key (unknown keys are inserted, not dropped);
/// any other non-null loaded value replaces the base leaf; nulls are ignored
/// so a sparse document cannot blank out a default.
pub fn merge_value(base: &mut Value, loaded: &Value) {
    match (base, loaded) {
        (Value::Object(base_map), Value::Object(loaded_map)) => {
            for (key, value) in loaded_map {
                match base_map.get_mut(key) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => {
            if !value.is_null() {
                *slot = value.clone();
            }
        }
    }
}

/// Build a full bundle from a possibly partial stored document.
pub fn merge_over_defaults(loaded: &Value) -> SettingsBundle {
    let Ok(mut base) = serde_json::to_value(SettingsBundle::default()) else {
        return SettingsBundle::default();
    };
    merge_value(&mut base, loaded);
    serde_json::from_value(base).unwrap_or_default()
}

/// Load the settings for `identity`, merged over defaults.
pub fn load_settings(store: &LocalStore, identity: &Identity) -> SettingsBundle {
    let raw = store.load(RecordKind::Settings, identity, Value::Null);
    if raw.is_null() {
        SettingsBundle::default()
    } else {
        merge_over_defaults(&raw)
    }
}

/// Persist the full bundle and announce the change.
pub fn save_settings(
    store: &LocalStore,
    notifier: &Notifier,
    identity: &Identity,
    bundle: &SettingsBundle,
) {
    store.save(RecordKind::Settings, identity, bundle);
    notifier.notify(Topic::Settings);
}
