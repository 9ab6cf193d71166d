//! Login / register page.
//!
//! Validation (password length, confirmation match) runs before any network
//! call and surfaces inline; backend rejections surface inline too, since
//! the form is the only view that cares.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::notify::{Notifier, Topic};
use crate::state::auth::AuthState;
use crate::state::security::password_strength;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

/// Auth page with login and register tabs.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = expect_context::<Arc<Notifier>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(Mode::Login);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the dashboard.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = auth.get();
            if !state.loading && state.user.is_some() {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    }

    let strength = move || password_strength(&password.get());

    let submit = {
        let notifier = Arc::clone(&notifier);
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            error.set(None);
            let current_mode = mode.get_untracked();
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();

            if email_value.is_empty() || password_value.is_empty() {
                error.set(Some("Email and password are required".to_owned()));
                return;
            }
            if current_mode == Mode::Register {
                if password_value.len() < 8 {
                    error.set(Some("Password must be at least 8 characters".to_owned()));
                    return;
                }
                if password_value != confirm.get_untracked() {
                    error.set(Some("Passwords do not match".to_owned()));
                    return;
                }
            }

            #[cfg(feature = "hydrate")]
            {
                let notifier = Arc::clone(&notifier);
                let navigate = navigate.clone();
                let name_value = name.get_untracked().trim().to_owned();
                busy.set(true);
                leptos::task::spawn_local(async move {
                    let result = match current_mode {
                        Mode::Login => crate::net::api::login(&email_value, &password_value).await,
                        Mode::Register => {
                            crate::net::api::register(&name_value, &email_value, &password_value)
                                .await
                        }
                    };
                    busy.set(false);
                    match result {
                        Ok(resp) => {
                            crate::state::auth::cache_session(&resp.token, &resp.user);
                            auth.update(|a| {
                                a.user = Some(resp.user);
                                a.loading = false;
                            });
                            notifier.notify(Topic::Auth);
                            navigate("/dashboard", NavigateOptions::default());
                        }
                        Err(e) => error.set(Some(e)),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&notifier, &navigate);
            }
        })
    };

    view! {
        <div class="auth-page">
            <h1>"Career Catalyst"</h1>
            <div class="auth-page__tabs">
                <button
                    class="tab"
                    class:tab--active=move || mode.get() == Mode::Login
                    on:click=move |_| mode.set(Mode::Login)
                >
                    "Sign in"
                </button>
                <button
                    class="tab"
                    class:tab--active=move || mode.get() == Mode::Register
                    on:click=move |_| mode.set(Mode::Register)
                >
                    "Create account"
                </button>
            </div>

            <form class="auth-page__form" on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <Show when=move || mode.get() == Mode::Register>
                    <label class="field">
                        "Name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <label class="field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || mode.get() == Mode::Register>
                    <label class="field">
                        "Confirm password"
                        <input
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="strength-meter">
                        <div
                            class="strength-meter__bar"
                            style:width=move || format!("{}%", strength())
                        ></div>
                    </div>
                </Show>

                <Show when=move || error.get().is_some()>
                    <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || {
                        match mode.get() {
                            Mode::Login => "Sign in",
                            Mode::Register => "Create account",
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
