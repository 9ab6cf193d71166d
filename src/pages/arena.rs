//! Coding arena: pick a problem, submit code, track local history + streak.
//!
//! The editor itself is a plain textarea — the real editor widget is an
//! external component mounted over it by the host page shell. Evaluation is
//! entirely server-side; the client records each result locally so the
//! history list survives reloads without another fetch.

use std::sync::Arc;

use leptos::prelude::*;

use crate::notify::{Notifier, Topic};
use crate::state::arena::{
    SubmissionRecord, cache_streak, load_streak, load_submissions, record_submission,
};
use crate::state::auth::AuthState;
use crate::state::toasts::ToastsState;
use crate::storage::LocalStore;

struct Problem {
    id: &'static str,
    title: &'static str,
    difficulty: &'static str,
    topic: &'static str,
}

const PROBLEMS: [Problem; 5] = [
    Problem { id: "two-sum", title: "Two Sum", difficulty: "easy", topic: "arrays" },
    Problem { id: "valid-parens", title: "Valid Parentheses", difficulty: "easy", topic: "stacks" },
    Problem { id: "binary-search", title: "Binary Search", difficulty: "medium", topic: "arrays" },
    Problem { id: "lru-cache", title: "LRU Cache", difficulty: "hard", topic: "design" },
    Problem { id: "word-ladder", title: "Word Ladder", difficulty: "hard", topic: "graphs" },
];

const LANGUAGES: [&str; 4] = ["python", "javascript", "rust", "java"];

/// Coding arena page.
#[component]
pub fn ArenaPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<Arc<LocalStore>>();
    let notifier = expect_context::<Arc<Notifier>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let identity = auth.get_untracked().identity();
    let submissions = RwSignal::new(load_submissions(&store, &identity));
    let streak = RwSignal::new(load_streak(&store, &identity));
    let problem_id = RwSignal::new("two-sum".to_owned());
    let language = RwSignal::new("python".to_owned());
    let code = RwSignal::new(String::new());
    let running = RwSignal::new(false);

    // Re-read history and streak when any arena record changes elsewhere.
    let sub = {
        let store = Arc::clone(&store);
        let identity = identity.clone();
        notifier.subscribe(Topic::Arena, move || {
            submissions.set(load_submissions(&store, &identity));
            streak.set(load_streak(&store, &identity));
        })
    };
    {
        let notifier = Arc::clone(&notifier);
        on_cleanup(move || notifier.unsubscribe(&sub));
    }

    // The streak advances server-side on passed submissions; refresh it from
    // the stats endpoint on mount.
    #[cfg(feature = "hydrate")]
    {
        let store = Arc::clone(&store);
        let notifier = Arc::clone(&notifier);
        let identity = identity.clone();
        leptos::task::spawn_local(async move {
            if let Some(stats) = crate::net::api::fetch_dashboard_stats().await {
                let previous = streak.get_untracked();
                let current = stats.coding_display_current_streak;
                cache_streak(&store, &notifier, &identity, previous, current);
                streak.set(current);
            }
        });
    }

    let run = {
        let store = Arc::clone(&store);
        let notifier = Arc::clone(&notifier);
        let identity = identity.clone();
        Callback::new(move |_: ()| {
            let source = code.get_untracked();
            if source.trim().is_empty() || running.get_untracked() {
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                let store = Arc::clone(&store);
                let notifier = Arc::clone(&notifier);
                let identity = identity.clone();
                let req = crate::net::types::CodeSubmissionRequest {
                    code: source,
                    language: language.get_untracked(),
                    problem_id: problem_id.get_untracked(),
                    user_id: auth.get_untracked().user.map(|u| u.id).unwrap_or_default(),
                    topic: PROBLEMS
                        .iter()
                        .find(|p| p.id == problem_id.get_untracked())
                        .map(|p| p.topic.to_owned()),
                    difficulty: None,
                };
                running.set(true);
                leptos::task::spawn_local(async move {
                    match crate::net::api::evaluate_code(&req).await {
                        Ok(eval) => {
                            let record = SubmissionRecord::from_evaluation(
                                &eval,
                                crate::util::time::now_ms(),
                            );
                            let mut list = submissions.get_untracked();
                            record_submission(&store, &notifier, &identity, &mut list, record);
                            submissions.set(list);
                            if eval.passed {
                                toasts.update(|t| {
                                    t.success(format!("Passed with score {}", eval.score));
                                });
                            } else {
                                toasts.update(|t| {
                                    t.info(format!("Not quite — score {}", eval.score));
                                });
                            }
                        }
                        Err(e) => {
                            toasts.update(|t| t.error(format!("Evaluation failed: {e}")));
                        }
                    }
                    running.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&store, &notifier, &identity, &toasts, source);
            }
        })
    };

    view! {
        <div class="arena-page">
            <aside class="arena-page__sidebar">
                <h2>"Problems"</h2>
                <span class="arena-page__streak">
                    {move || format!("{} day streak", streak.get())}
                </span>
                <ul class="arena-page__problems">
                    {PROBLEMS
                        .iter()
                        .map(|p| {
                            let id = p.id;
                            view! {
                                <li>
                                    <button
                                        class="arena-page__problem"
                                        class:arena-page__problem--active=move || {
                                            problem_id.get() == id
                                        }
                                        on:click=move |_| problem_id.set(id.to_owned())
                                    >
                                        <span>{p.title}</span>
                                        <span class="arena-page__difficulty">{p.difficulty}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </aside>

            <section class="arena-page__editor">
                <div class="arena-page__toolbar">
                    <select on:change=move |ev| language.set(event_target_value(&ev))>
                        {LANGUAGES
                            .into_iter()
                            .map(|lang| {
                                view! {
                                    <option value=lang selected=move || language.get() == lang>
                                        {lang}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button
                        class="btn btn--primary"
                        disabled=move || running.get()
                        on:click=move |_| run.run(())
                    >
                        {move || if running.get() { "Evaluating..." } else { "Run" }}
                    </button>
                </div>
                <textarea
                    class="arena-page__code"
                    placeholder="Write your solution here"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                ></textarea>

                <h2>"Recent submissions"</h2>
                <ul class="arena-page__history">
                    <For
                        each=move || submissions.get()
                        key=|s| format!("{}:{}", s.problem_id, s.ts)
                        children=move |s| {
                            view! {
                                <li class="arena-page__submission">
                                    <span>{s.problem_id.clone()}</span>
                                    <span>{s.language.clone()}</span>
                                    <span class:submission--passed=s.passed>
                                        {format!("{}%", s.score)}
                                    </span>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </div>
    }
}
