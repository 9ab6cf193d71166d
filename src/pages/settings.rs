//! Settings page: tabbed preference editor with per-toggle auto-save.
//!
//! Every change writes the full bundle back through the settings owner, so
//! the store, the settings topic, and any concurrently mounted view stay in
//! step without a save button (one still exists for reassurance).

use std::sync::Arc;

use leptos::prelude::*;

use crate::notify::{Notifier, Topic};
use crate::state::auth::AuthState;
use crate::state::security::{
    SecurityFlags, load_security, password_strength, save_security, validate_password_change,
};
use crate::state::settings::{SettingsBundle, load_settings, save_settings};
use crate::state::toasts::ToastsState;
use crate::storage::{Identity, LocalStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SettingsTab {
    #[default]
    Notifications,
    Security,
    Preferences,
    Learning,
    Accessibility,
}

impl SettingsTab {
    const ALL: [Self; 5] = [
        Self::Notifications,
        Self::Security,
        Self::Preferences,
        Self::Learning,
        Self::Accessibility,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Notifications => "Notifications",
            Self::Security => "Security",
            Self::Preferences => "Preferences",
            Self::Learning => "Learning",
            Self::Accessibility => "Accessibility",
        }
    }
}

/// Shared context for the per-field save callbacks.
#[derive(Clone)]
struct SettingsCtx {
    store: Arc<LocalStore>,
    notifier: Arc<Notifier>,
    identity: Identity,
    bundle: RwSignal<SettingsBundle>,
    toasts: RwSignal<ToastsState>,
}

impl SettingsCtx {
    /// Apply `set` to the current bundle, persist, publish, confirm.
    fn persist(&self, label: &str, set: impl FnOnce(&mut SettingsBundle)) {
        let mut bundle = self.bundle.get_untracked();
        set(&mut bundle);
        save_settings(&self.store, &self.notifier, &self.identity, &bundle);
        crate::util::theme::apply(crate::util::theme::Theme::from_preference(
            &bundle.preferences.theme,
        ));
        self.bundle.set(bundle);
        self.toasts.update(|t| t.success(format!("{label} updated")));
    }

    fn toggle(&self, label: &'static str, set: fn(&mut SettingsBundle, bool)) -> Callback<bool> {
        let ctx = self.clone();
        Callback::new(move |value| ctx.persist(label, |b| set(b, value)))
    }

    fn choice(&self, label: &'static str, set: fn(&mut SettingsBundle, String)) -> Callback<String> {
        let ctx = self.clone();
        Callback::new(move |value| ctx.persist(label, |b| set(b, value)))
    }
}

/// Settings page.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<Arc<LocalStore>>();
    let notifier = expect_context::<Arc<Notifier>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let identity = auth.get_untracked().identity();
    let bundle = RwSignal::new(load_settings(&store, &identity));
    let flags = RwSignal::new(load_security(&store, &identity));
    let tab = RwSignal::new(SettingsTab::default());

    // Re-read when another view (or tab) writes settings or security flags.
    let sub = {
        let store = Arc::clone(&store);
        let identity = identity.clone();
        notifier.subscribe(Topic::Settings, move || {
            bundle.set(load_settings(&store, &identity));
            flags.set(load_security(&store, &identity));
        })
    };
    {
        let notifier = Arc::clone(&notifier);
        on_cleanup(move || notifier.unsubscribe(&sub));
    }

    let ctx = SettingsCtx {
        store: Arc::clone(&store),
        notifier: Arc::clone(&notifier),
        identity: identity.clone(),
        bundle,
        toasts,
    };

    let notif_ctx = ctx.clone();
    let security_ctx = ctx.clone();
    let prefs_ctx = ctx.clone();
    let learning_ctx = ctx.clone();
    let access_ctx = ctx.clone();

    let save_all = {
        let ctx = ctx.clone();
        move |_| {
            let current = ctx.bundle.get_untracked();
            save_settings(&ctx.store, &ctx.notifier, &ctx.identity, &current);
            ctx.toasts.update(|t| t.success("All settings saved"));
        }
    };

    view! {
        <div class="settings-page">
            <header class="settings-page__header">
                <h1>"Settings"</h1>
                <button class="btn btn--primary" on:click=save_all>
                    "Save all"
                </button>
            </header>

            <div class="settings-page__tabs">
                {SettingsTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tab"
                                class:tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || tab.get() == SettingsTab::Notifications>
                <NotificationsTab ctx=notif_ctx.clone()/>
            </Show>
            <Show when=move || tab.get() == SettingsTab::Security>
                <SecurityTab ctx=security_ctx.clone() flags=flags/>
            </Show>
            <Show when=move || tab.get() == SettingsTab::Preferences>
                <PreferencesTab ctx=prefs_ctx.clone()/>
            </Show>
            <Show when=move || tab.get() == SettingsTab::Learning>
                <LearningTab ctx=learning_ctx.clone()/>
            </Show>
            <Show when=move || tab.get() == SettingsTab::Accessibility>
                <AccessibilityTab ctx=access_ctx.clone()/>
            </Show>
        </div>
    }
}

/// One labeled on/off switch row.
#[component]
fn ToggleRow(
    label: &'static str,
    checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle-row">
            <span class="toggle-row__label">{label}</span>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
        </label>
    }
}

/// One labeled select row.
#[component]
fn SelectRow(
    label: &'static str,
    options: Vec<&'static str>,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="select-row">
            <span class="select-row__label">{label}</span>
            <select on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options
                    .into_iter()
                    .map(|opt| {
                        view! {
                            <option value=opt selected=move || value.get() == opt>
                                {opt}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
fn NotificationsTab(ctx: SettingsCtx) -> impl IntoView {
    let bundle = ctx.bundle;
    view! {
        <section class="settings-section">
            <ToggleRow
                label="Email notifications"
                checked=Signal::derive(move || bundle.get().notifications.email)
                on_toggle=ctx.toggle("Email notifications", |b, v| b.notifications.email = v)
            />
            <ToggleRow
                label="Push notifications"
                checked=Signal::derive(move || bundle.get().notifications.push)
                on_toggle=ctx.toggle("Push notifications", |b, v| b.notifications.push = v)
            />
            <ToggleRow
                label="Achievement alerts"
                checked=Signal::derive(move || bundle.get().notifications.achievements)
                on_toggle=ctx.toggle("Achievement alerts", |b, v| b.notifications.achievements = v)
            />
            <ToggleRow
                label="Practice reminders"
                checked=Signal::derive(move || bundle.get().notifications.reminders)
                on_toggle=ctx.toggle("Practice reminders", |b, v| b.notifications.reminders = v)
            />
            <ToggleRow
                label="Weekly report"
                checked=Signal::derive(move || bundle.get().notifications.weekly_report)
                on_toggle=ctx.toggle("Weekly report", |b, v| b.notifications.weekly_report = v)
            />
            <ToggleRow
                label="New feature news"
                checked=Signal::derive(move || bundle.get().notifications.new_features)
                on_toggle=ctx.toggle("New feature news", |b, v| b.notifications.new_features = v)
            />
            <ToggleRow
                label="Marketing emails"
                checked=Signal::derive(move || bundle.get().notifications.marketing)
                on_toggle=ctx.toggle("Marketing emails", |b, v| b.notifications.marketing = v)
            />
            <ToggleRow
                label="Notification sound"
                checked=Signal::derive(move || bundle.get().notifications.sound)
                on_toggle=ctx.toggle("Notification sound", |b, v| b.notifications.sound = v)
            />
        </section>
    }
}

#[component]
fn SecurityTab(ctx: SettingsCtx, flags: RwSignal<SecurityFlags>) -> impl IntoView {
    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let strength = move || password_strength(&new_password.get());

    let persist_flags = {
        let ctx = ctx.clone();
        move |label: &'static str, set: fn(&mut SecurityFlags, bool)| {
            let ctx = ctx.clone();
            Callback::new(move |value| {
                let mut current_flags = flags.get_untracked();
                set(&mut current_flags, value);
                save_security(&ctx.store, &ctx.notifier, &ctx.identity, &current_flags);
                flags.set(current_flags);
                ctx.toasts.update(|t| t.success(format!("{label} updated")));
            })
        }
    };

    let change_password = {
        let toasts = ctx.toasts;
        move |_| {
            let result = validate_password_change(
                &current.get_untracked(),
                &new_password.get_untracked(),
                &confirm.get_untracked(),
            );
            match result {
                Ok(()) => {
                    error.set(None);
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    toasts.update(|t| t.success("Password changed"));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    };

    view! {
        <section class="settings-section">
            <ToggleRow
                label="Two-factor authentication"
                checked=Signal::derive(move || flags.get().two_factor)
                on_toggle=persist_flags("Two-factor authentication", |f, v| f.two_factor = v)
            />
            <ToggleRow
                label="Biometric unlock"
                checked=Signal::derive(move || flags.get().biometric_unlock)
                on_toggle=persist_flags("Biometric unlock", |f, v| f.biometric_unlock = v)
            />
            <ToggleRow
                label="New session alerts"
                checked=Signal::derive(move || flags.get().session_alerts)
                on_toggle=persist_flags("New session alerts", |f, v| f.session_alerts = v)
            />

            <h2>"Change password"</h2>
            <label class="field">
                "Current password"
                <input
                    type="password"
                    prop:value=move || current.get()
                    on:input=move |ev| current.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                "New password"
                <input
                    type="password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
            </label>
            <div class="strength-meter">
                <div class="strength-meter__bar" style:width=move || format!("{}%", strength())></div>
            </div>
            <label class="field">
                "Confirm new password"
                <input
                    type="password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="settings-section__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn" on:click=change_password>
                "Update password"
            </button>
        </section>
    }
}

#[component]
fn PreferencesTab(ctx: SettingsCtx) -> impl IntoView {
    let bundle = ctx.bundle;
    view! {
        <section class="settings-section">
            <SelectRow
                label="Theme"
                options=vec!["dark", "light", "system"]
                value=Signal::derive(move || bundle.get().preferences.theme.clone())
                on_change=ctx.choice("Theme", |b, v| b.preferences.theme = v)
            />
            <SelectRow
                label="Font size"
                options=vec!["small", "medium", "large"]
                value=Signal::derive(move || bundle.get().preferences.font_size.clone())
                on_change=ctx.choice("Font size", |b, v| b.preferences.font_size = v)
            />
            <SelectRow
                label="Date format"
                options=vec!["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"]
                value=Signal::derive(move || bundle.get().preferences.date_format.clone())
                on_change=ctx.choice("Date format", |b, v| b.preferences.date_format = v)
            />
            <ToggleRow
                label="Auto-save code"
                checked=Signal::derive(move || bundle.get().preferences.auto_save)
                on_toggle=ctx.toggle("Auto-save code", |b, v| b.preferences.auto_save = v)
            />
            <ToggleRow
                label="Compact mode"
                checked=Signal::derive(move || bundle.get().preferences.compact_mode)
                on_toggle=ctx.toggle("Compact mode", |b, v| b.preferences.compact_mode = v)
            />
        </section>
    }
}

#[component]
fn LearningTab(ctx: SettingsCtx) -> impl IntoView {
    let bundle = ctx.bundle;
    let goal_ctx = ctx.clone();
    view! {
        <section class="settings-section">
            <label class="field">
                "Daily goal (minutes)"
                <input
                    type="number"
                    min="5"
                    max="240"
                    prop:value=move || bundle.get().learning.daily_goal.to_string()
                    on:change=move |ev| {
                        if let Ok(goal) = event_target_value(&ev).parse::<u32>() {
                            goal_ctx.persist("Daily goal", |b| b.learning.daily_goal = goal);
                        }
                    }
                />
            </label>
            <SelectRow
                label="Default difficulty"
                options=vec!["easy", "medium", "hard"]
                value=Signal::derive(move || bundle.get().learning.difficulty.clone())
                on_change=ctx.choice("Default difficulty", |b, v| b.learning.difficulty = v)
            />
            <SelectRow
                label="Reminder time"
                options=vec!["07:00", "09:00", "12:00", "18:00", "21:00"]
                value=Signal::derive(move || bundle.get().learning.reminder_time.clone())
                on_change=ctx.choice("Reminder time", |b, v| b.learning.reminder_time = v)
            />
            <ToggleRow
                label="Weekend reminders"
                checked=Signal::derive(move || bundle.get().learning.weekend_reminders)
                on_toggle=ctx.toggle("Weekend reminders", |b, v| b.learning.weekend_reminders = v)
            />
            <ToggleRow
                label="Streak notifications"
                checked=Signal::derive(move || bundle.get().learning.streak_notifications)
                on_toggle=ctx.toggle("Streak notifications", |b, v| {
                    b.learning.streak_notifications = v;
                })
            />
        </section>
    }
}

#[component]
fn AccessibilityTab(ctx: SettingsCtx) -> impl IntoView {
    let bundle = ctx.bundle;
    view! {
        <section class="settings-section">
            <ToggleRow
                label="Reduce motion"
                checked=Signal::derive(move || bundle.get().accessibility.reduce_motion)
                on_toggle=ctx.toggle("Reduce motion", |b, v| b.accessibility.reduce_motion = v)
            />
            <ToggleRow
                label="High contrast"
                checked=Signal::derive(move || bundle.get().accessibility.high_contrast)
                on_toggle=ctx.toggle("High contrast", |b, v| b.accessibility.high_contrast = v)
            />
            <ToggleRow
                label="Screen reader hints"
                checked=Signal::derive(move || bundle.get().accessibility.screen_reader)
                on_toggle=ctx.toggle("Screen reader hints", |b, v| b.accessibility.screen_reader = v)
            />
            <ToggleRow
                label="Keyboard navigation"
                checked=Signal::derive(move || bundle.get().accessibility.keyboard_nav)
                on_toggle=ctx.toggle("Keyboard navigation", |b, v| b.accessibility.keyboard_nav = v)
            />
        </section>
    }
}
