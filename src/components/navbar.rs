//! Top navigation bar, auth-aware.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::notify::{Notifier, Topic};
use crate::state::auth::AuthState;

/// Navigation bar shown on every page.
///
/// Shows the main section links plus the signed-in user's name; signing out
/// clears the session cache and publishes the auth topic so any other
/// mounted view drops its user-scoped data.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = expect_context::<Arc<Notifier>>();
    let navigate = use_navigate();

    let user_name = move || {
        auth.get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "Guest".to_owned())
    };

    let on_logout = move |_| {
        crate::net::api::logout();
        auth.update(|a| a.user = None);
        notifier.notify(Topic::Auth);
        navigate("/auth", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/dashboard">
                "Career Catalyst"
            </a>
            <div class="navbar__links">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/coding">"Coding"</a>
                <a href="/tutor">"Tutor"</a>
                <a href="/resources">"Resources"</a>
                <a href="/leaderboard">"Leaderboard"</a>
                <a href="/profile">"Profile"</a>
                <a href="/settings">"Settings"</a>
            </div>
            <div class="navbar__session">
                <span class="navbar__user">{user_name}</span>
                <Show when=move || auth.get().is_authenticated()>
                    <button class="btn btn--ghost" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
