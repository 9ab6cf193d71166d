//! AI tutor page: chat thread with per-user persisted history and stats.
//!
//! The transcript persists after every append (capped to the most recent
//! messages) so a reload — or a second mounted view subscribed to the tutor
//! topic — picks up right where the conversation left off. A failed reply
//! keeps the user's message in the thread with an error toast.

use std::sync::Arc;

use leptos::prelude::*;

use crate::notify::{Notifier, Topic};
use crate::state::auth::AuthState;
use crate::state::toasts::ToastsState;
use crate::state::tutor::{
    MessageRole, TutorMessage, TutorStats, clear_history, load_history, load_stats,
    persist_history, save_stats,
};
use crate::storage::{Identity, LocalStore};
use crate::util::time::now_ms;

const TOPICS: [&str; 5] = ["dsa", "web-dev", "databases", "system-design", "career"];
const QUICK_PROMPTS: [&str; 4] = [
    "Explain with an example",
    "What are the key concepts?",
    "Common interview questions",
    "Best practices",
];

/// Tutor page.
#[component]
pub fn TutorPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<Arc<LocalStore>>();
    let notifier = expect_context::<Arc<Notifier>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let identity = auth.get_untracked().identity();
    let messages = RwSignal::new(load_history(&store, &identity));
    let stats = RwSignal::new(load_stats(&store, &identity));
    let input = RwSignal::new(String::new());
    let topic = RwSignal::new("dsa".to_owned());
    let difficulty = RwSignal::new("intermediate".to_owned());
    let sending = RwSignal::new(false);

    let sub = {
        let store = Arc::clone(&store);
        let identity = identity.clone();
        notifier.subscribe(Topic::Tutor, move || {
            messages.set(load_history(&store, &identity));
            stats.set(load_stats(&store, &identity));
        })
    };
    {
        let notifier = Arc::clone(&notifier);
        on_cleanup(move || notifier.unsubscribe(&sub));
    }

    // Session clock: tick once a second while the page is mounted, persisting
    // at a coarser cadence to keep storage writes cheap.
    #[cfg(feature = "hydrate")]
    {
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        {
            let alive = Arc::clone(&alive);
            on_cleanup(move || alive.store(false, Ordering::SeqCst));
        }
        let store = Arc::clone(&store);
        let identity = identity.clone();
        leptos::task::spawn_local(async move {
            let mut ticks: u64 = 0;
            while alive.load(Ordering::SeqCst) {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                ticks += 1;
                let mut current = stats.get_untracked();
                current.session_seconds += 1;
                if ticks % 15 == 0 {
                    save_stats(&store, &identity, &current);
                }
                stats.set(current);
            }
        });
    }

    let send = {
        let store = Arc::clone(&store);
        let notifier = Arc::clone(&notifier);
        let identity = identity.clone();
        Callback::new(move |_: ()| {
            let text = input.get_untracked().trim().to_owned();
            if text.is_empty() || sending.get_untracked() {
                return;
            }
            input.set(String::new());

            append_message(
                &store,
                &notifier,
                &identity,
                messages,
                TutorMessage {
                    id: uuid::Uuid::new_v4().to_string(),
                    role: MessageRole::User,
                    content: text.clone(),
                    ts: now_ms(),
                },
            );
            let mut updated_stats = stats.get_untracked();
            updated_stats.questions_asked += 1;
            save_stats(&store, &identity, &updated_stats);
            stats.set(updated_stats);

            #[cfg(feature = "hydrate")]
            {
                let store = Arc::clone(&store);
                let notifier = Arc::clone(&notifier);
                let identity = identity.clone();
                let req = crate::net::types::TutorRequest {
                    message: text,
                    topic: Some(topic.get_untracked()),
                    difficulty: Some(difficulty.get_untracked()),
                };
                sending.set(true);
                leptos::task::spawn_local(async move {
                    match crate::net::api::tutor_chat(&req).await {
                        Ok(reply) => {
                            append_message(
                                &store,
                                &notifier,
                                &identity,
                                messages,
                                TutorMessage {
                                    id: uuid::Uuid::new_v4().to_string(),
                                    role: MessageRole::Assistant,
                                    content: reply.response,
                                    ts: now_ms(),
                                },
                            );
                        }
                        Err(e) => {
                            toasts.update(|t| t.error(format!("Tutor is unavailable: {e}")));
                        }
                    }
                    sending.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&text, &toasts);
            }
        })
    };

    let on_clear = {
        let store = Arc::clone(&store);
        let notifier = Arc::clone(&notifier);
        let identity = identity.clone();
        move |_| {
            clear_history(&store, &notifier, &identity);
            messages.set(Vec::new());
        }
    };

    view! {
        <div class="tutor-page">
            <aside class="tutor-page__sidebar">
                <h2>"AI Tutor"</h2>
                <label class="field">
                    "Topic"
                    <select on:change=move |ev| {
                        let next = event_target_value(&ev);
                        if next != topic.get_untracked() {
                            let mut s = stats.get_untracked();
                            s.topics_explored += 1;
                            stats.set(s);
                        }
                        topic.set(next);
                    }>
                        {TOPICS
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <option value=t selected=move || topic.get() == t>
                                        {t}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    "Difficulty"
                    <select on:change=move |ev| difficulty.set(event_target_value(&ev))>
                        {["beginner", "intermediate", "advanced"]
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <option value=d selected=move || difficulty.get() == d>
                                        {d}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <SessionStats stats=stats/>
                <button class="btn btn--ghost" on:click=on_clear>
                    "Clear chat"
                </button>
            </aside>

            <section class="tutor-page__thread">
                <div class="tutor-page__messages">
                    <For
                        each=move || messages.get()
                        key=|msg| msg.id.clone()
                        children=move |msg| {
                            let class = match msg.role {
                                MessageRole::User => "chat-message chat-message--user",
                                MessageRole::Assistant => "chat-message chat-message--assistant",
                            };
                            view! {
                                <div class=class>
                                    <p>{msg.content.clone()}</p>
                                </div>
                            }
                        }
                    />
                    <Show when=move || sending.get()>
                        <div class="chat-message chat-message--assistant chat-message--pending">
                            <p>"Thinking..."</p>
                        </div>
                    </Show>
                </div>

                <div class="tutor-page__quick-prompts">
                    {QUICK_PROMPTS
                        .into_iter()
                        .map(|prompt| {
                            view! {
                                <button class="chip" on:click=move |_| input.set(prompt.to_owned())>
                                    {prompt}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="tutor-page__composer">
                    <input
                        type="text"
                        placeholder="Ask anything..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                send.run(());
                            }
                        }
                    />
                    <button
                        class="btn btn--primary"
                        disabled=move || sending.get()
                        on:click=move |_| send.run(())
                    >
                        "Send"
                    </button>
                </div>
            </section>
        </div>
    }
}

/// Append to the thread and persist the capped transcript.
fn append_message(
    store: &Arc<LocalStore>,
    notifier: &Arc<Notifier>,
    identity: &Identity,
    messages: RwSignal<Vec<TutorMessage>>,
    message: TutorMessage,
) {
    messages.update(|list| list.push(message));
    persist_history(store, notifier, identity, &messages.get_untracked());
}

/// Sidebar stats block.
#[component]
fn SessionStats(stats: RwSignal<TutorStats>) -> impl IntoView {
    view! {
        <div class="tutor-page__stats">
            <p>{move || format!("Questions asked: {}", stats.get().questions_asked)}</p>
            <p>{move || format!("Topics explored: {}", stats.get().topics_explored)}</p>
            <p>
                {move || {
                    let s = stats.get().session_seconds;
                    format!("Session time: {}m {}s", s / 60, s % 60)
                }}
            </p>
        </div>
    }
}
