//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::components::toast_stack::ToastStack;
use crate::notify::Notifier;
use crate::pages::{
    arena::ArenaPage, auth::AuthPage, dashboard::DashboardPage, leaderboard::LeaderboardPage,
    profile::ProfilePage, resources::ResourcesPage, settings::SettingsPage, tutor::TutorPage,
};
use crate::state::auth::AuthState;
use crate::state::toasts::ToastsState;
use crate::storage::LocalStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared store, notifier, and state contexts, restores the
/// cached session, wires the cross-tab storage event into the notifier, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = Arc::new(LocalStore::browser());
    let notifier = Arc::new(Notifier::new());
    let auth = RwSignal::new(AuthState { user: None, loading: true });
    let toasts = RwSignal::new(ToastsState::default());

    provide_context(Arc::clone(&store));
    provide_context(Arc::clone(&notifier));
    provide_context(auth);
    provide_context(toasts);

    restore_session(&store, &notifier, auth);
    wire_storage_events(&notifier);

    view! {
        <Stylesheet id="leptos" href="/pkg/catalyst.css"/>
        <Title text="Career Catalyst"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("tutor") view=TutorPage/>
                    <Route path=StaticSegment("coding") view=ArenaPage/>
                    <Route path=StaticSegment("resources") view=ResourcesPage/>
                    <Route path=StaticSegment("leaderboard") view=LeaderboardPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}

/// Hydrate auth from the session cache, then reconcile against the backend.
///
/// The cached user renders immediately; `/api/auth/me` then confirms or
/// clears it. Server values win over the cache for identity fields.
fn restore_session(store: &Arc<LocalStore>, notifier: &Arc<Notifier>, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::notify::Topic;
        use crate::state::settings::load_settings;
        use crate::util::theme;

        let cached = crate::state::auth::cached_user();
        auth.update(|a| a.user = cached.clone());

        // Theme applies before the first paint settles, from the cached
        // identity's settings.
        let identity = crate::storage::Identity::from_user(cached.as_ref());
        let bundle = load_settings(store, &identity);
        theme::apply(theme::Theme::from_preference(&bundle.preferences.theme));

        let notifier = Arc::clone(notifier);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Some(user) => {
                    if let Some(token) = crate::state::auth::cached_token() {
                        crate::state::auth::cache_session(&token, &user);
                    }
                    auth.update(|a| {
                        a.user = Some(user);
                        a.loading = false;
                    });
                }
                None => {
                    auth.update(|a| a.loading = false);
                }
            }
            notifier.notify(Topic::Auth);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, notifier);
        auth.update(|a| a.loading = false);
    }
}

/// Re-publish cross-tab storage events as notifier topics.
///
/// Another tab writing a namespaced record fires the browser's `storage`
/// event here; subscribers treat it exactly like a same-tab notify and
/// re-read the store.
fn wire_storage_events(notifier: &Arc<Notifier>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::notify::topic_for;
        use crate::storage::store::RecordKind;

        let notifier = Arc::clone(notifier);
        let on_storage = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            let Some(key) = ev.key() else {
                return;
            };
            if let Some(kind) = RecordKind::from_key(&key) {
                notifier.notify(topic_for(kind));
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref());
        }
        // The listener lives for the tab's lifetime.
        on_storage.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notifier;
    }
}
