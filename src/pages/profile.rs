//! Profile page: view/edit the profile bundle with best-effort server sync.
//!
//! Edits land in the namespaced store and publish the profile topic before
//! the backend PUT is even sent; a rejected PUT produces an error toast and
//! nothing else. The local cache is allowed to run ahead of the server until
//! the next successful push.

use std::sync::Arc;

use leptos::prelude::*;

use crate::notify::{Notifier, Topic};
use crate::state::auth::AuthState;
use crate::state::profile::{ProfileBundle, load_profile, save_profile};
use crate::state::toasts::ToastsState;
use crate::storage::LocalStore;

/// Profile page.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<Arc<LocalStore>>();
    let notifier = expect_context::<Arc<Notifier>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let identity = auth.get_untracked().identity();
    let draft = RwSignal::new(load_profile(&store, &identity));
    let editing = RwSignal::new(false);
    let new_skill = RwSignal::new(String::new());

    // Reconcile the cached bundle against the server once, on mount. Server
    // wins on identity fields; local edits win everywhere else.
    #[cfg(feature = "hydrate")]
    {
        use crate::state::profile::{ReconcilePolicy, reconcile};
        leptos::task::spawn_local(async move {
            if let Some(server) = crate::net::api::fetch_profile().await {
                draft.update(|bundle| {
                    reconcile(bundle, &server, &ReconcilePolicy::default());
                });
            }
        });
    }

    // Another mounted view may rewrite the profile record; re-read unless a
    // local edit is in flight (the open editor wins over a background read).
    let sub = {
        let store = Arc::clone(&store);
        let identity = identity.clone();
        notifier.subscribe(Topic::Profile, move || {
            if !editing.get_untracked() {
                draft.set(load_profile(&store, &identity));
            }
        })
    };
    {
        let notifier = Arc::clone(&notifier);
        on_cleanup(move || notifier.unsubscribe(&sub));
    }

    let on_save = {
        let store = Arc::clone(&store);
        let notifier = Arc::clone(&notifier);
        let identity = identity.clone();
        move |_| {
            let bundle = draft.get_untracked();
            // Optimistic: local save + notify first, push second.
            save_profile(&store, &notifier, &identity, &bundle);
            editing.set(false);

            #[cfg(feature = "hydrate")]
            {
                use crate::state::profile::apply_push_outcome;
                let update = bundle.as_update();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::update_profile(&update).await.map(|_| ());
                    toasts.update(|t| apply_push_outcome(t, &result));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = toasts;
            }
        }
    };

    let add_skill = move |_| {
        let skill = new_skill.get_untracked();
        draft.update(|bundle| {
            if bundle.add_skill(&skill) {
                new_skill.set(String::new());
            }
        });
    };

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <h1>"Profile"</h1>
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <button class="btn" on:click=move |_| editing.set(true)>
                                "Edit"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" on:click=on_save.clone()>
                        "Save"
                    </button>
                </Show>
            </header>

            <section class="profile-page__identity">
                <h2>{move || draft.get().name}</h2>
                <p class="profile-page__email">{move || draft.get().email}</p>
                <p class="profile-page__title">
                    {move || {
                        let b = draft.get();
                        if b.title.is_empty() { "No title set".to_owned() } else { b.title }
                    }}
                </p>
            </section>

            <Show when=move || editing.get()>
                <section class="profile-page__form">
                    <ProfileField
                        label="Phone"
                        value=Signal::derive(move || draft.get().phone)
                        on_input=field(draft, |b, v| b.phone = v)
                    />
                    <ProfileField
                        label="Location"
                        value=Signal::derive(move || draft.get().location)
                        on_input=field(draft, |b, v| b.location = v)
                    />
                    <ProfileField
                        label="Bio"
                        value=Signal::derive(move || draft.get().bio)
                        on_input=field(draft, |b, v| b.bio = v)
                    />
                    <ProfileField
                        label="Title"
                        value=Signal::derive(move || draft.get().title)
                        on_input=field(draft, |b, v| b.title = v)
                    />
                    <ProfileField
                        label="Company"
                        value=Signal::derive(move || draft.get().company)
                        on_input=field(draft, |b, v| b.company = v)
                    />
                    <ProfileField
                        label="University"
                        value=Signal::derive(move || draft.get().university)
                        on_input=field(draft, |b, v| b.university = v)
                    />
                    <ProfileField
                        label="Graduation year"
                        value=Signal::derive(move || draft.get().graduation_year)
                        on_input=field(draft, |b, v| b.graduation_year = v)
                    />
                    <ProfileField
                        label="GitHub"
                        value=Signal::derive(move || draft.get().github)
                        on_input=field(draft, |b, v| b.github = v)
                    />
                    <ProfileField
                        label="LinkedIn"
                        value=Signal::derive(move || draft.get().linkedin)
                        on_input=field(draft, |b, v| b.linkedin = v)
                    />
                    <ProfileField
                        label="Portfolio"
                        value=Signal::derive(move || draft.get().portfolio)
                        on_input=field(draft, |b, v| b.portfolio = v)
                    />
                </section>
            </Show>

            <section class="profile-page__skills">
                <h2>"Skills"</h2>
                <div class="profile-page__skill-list">
                    <For
                        each=move || draft.get().skills
                        key=|skill| skill.clone()
                        children=move |skill| {
                            let for_remove = skill.clone();
                            view! {
                                <span class="skill-tag">
                                    {skill.clone()}
                                    <Show when=move || editing.get()>
                                        {
                                            let for_remove = for_remove.clone();
                                            view! {
                                                <button
                                                    class="skill-tag__remove"
                                                    on:click=move |_| {
                                                        let skill = for_remove.clone();
                                                        draft.update(|b| b.remove_skill(&skill));
                                                    }
                                                >
                                                    "×"
                                                </button>
                                            }
                                        }
                                    </Show>
                                </span>
                            }
                        }
                    />
                </div>
                <Show when=move || editing.get()>
                    <div class="profile-page__skill-add">
                        <input
                            type="text"
                            placeholder="Add a skill"
                            prop:value=move || new_skill.get()
                            on:input=move |ev| new_skill.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    add_skill(());
                                }
                            }
                        />
                        <button class="btn" on:click=move |_| add_skill(())>
                            "Add"
                        </button>
                    </div>
                </Show>
            </section>
        </div>
    }
}

/// Build the input callback for one editable field.
fn field(draft: RwSignal<ProfileBundle>, set: fn(&mut ProfileBundle, String)) -> Callback<String> {
    Callback::new(move |value| draft.update(|b| set(b, value)))
}

/// One labeled text input bound to a profile field.
#[component]
fn ProfileField(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            {label}
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
