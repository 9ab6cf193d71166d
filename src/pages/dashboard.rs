//! Student dashboard: stats overview and streaks.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::notify::{Notifier, Topic};
use crate::state::arena::{cache_streak, load_streak};
use crate::state::auth::AuthState;
use crate::storage::LocalStore;

/// Dashboard page — stat cards over `/api/dashboard/stats`.
///
/// The coding streak renders immediately from its cached record and
/// reconciles once the stats fetch lands; the cache write publishes the
/// arena topic so a concurrently mounted arena view picks it up too.
/// Redirects to `/auth` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<Arc<LocalStore>>();
    let notifier = expect_context::<Arc<Notifier>>();
    let navigate = use_navigate();

    // Redirect to the auth page if not signed in.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/auth", NavigateOptions::default());
        }
    });

    let identity = auth.get_untracked().identity();
    let streak = RwSignal::new(load_streak(&store, &identity));

    // Another view (or tab) may refresh the streak cache; re-read on signal.
    let sub = {
        let store = Arc::clone(&store);
        let identity = identity.clone();
        notifier.subscribe(Topic::Arena, move || {
            streak.set(load_streak(&store, &identity));
        })
    };
    {
        let notifier = Arc::clone(&notifier);
        on_cleanup(move || notifier.unsubscribe(&sub));
    }

    let stats = LocalResource::new(crate::net::api::fetch_dashboard_stats);

    // Reconcile the cached streak with the server once stats arrive.
    {
        let store = Arc::clone(&store);
        let notifier = Arc::clone(&notifier);
        let identity = identity.clone();
        Effect::new(move || {
            if let Some(Some(fetched)) = stats.get() {
                let previous = streak.get_untracked();
                let current = fetched.coding_display_current_streak;
                cache_streak(&store, &notifier, &identity, previous, current);
                streak.set(current);
            }
        });
    }

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <span class="dashboard-page__streak">
                    {move || format!("{} day streak", streak.get())}
                </span>
            </header>

            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|maybe| {
                            match maybe {
                                Some(s) => {
                                    view! {
                                        <div class="dashboard-page__grid">
                                            <StatCard
                                                label="Code submissions"
                                                value=s.code_submissions.to_string()
                                            />
                                            <StatCard
                                                label="Average score"
                                                value=format!("{:.1}%", s.avg_code_score)
                                            />
                                            <StatCard
                                                label="Career readiness"
                                                value=format!("{:.0}", s.career_readiness_score)
                                                hint="out of 100".to_owned()
                                            />
                                            <StatCard
                                                label="Learning sessions"
                                                value=s.learning_sessions.to_string()
                                            />
                                            <StatCard
                                                label="Interviews taken"
                                                value=s.interviews_taken.to_string()
                                            />
                                            <StatCard
                                                label="Longest streak"
                                                value=format!("{} days", s.longest_streak)
                                            />
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <p class="dashboard-page__empty">
                                            "Stats are unavailable right now."
                                        </p>
                                    }
                                        .into_any()
                                }
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
