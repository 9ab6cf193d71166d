//! Resources page: searchable catalog with per-user bookmark/completed marks.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::resource_card::ResourceCard;
use crate::notify::{Notifier, Topic};
use crate::state::auth::AuthState;
use crate::state::resources::{
    catalog, filter_resources, load_bookmarks, load_completed, save_bookmarks, save_completed,
    toggle_id,
};
use crate::state::toasts::ToastsState;
use crate::storage::LocalStore;

const CATEGORIES: [&str; 5] = ["dsa", "web-dev", "databases", "system-design", "career"];

/// Resources page.
#[component]
pub fn ResourcesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<Arc<LocalStore>>();
    let notifier = expect_context::<Arc<Notifier>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let identity = auth.get_untracked().identity();
    let bookmarks = RwSignal::new(load_bookmarks(&store, &identity));
    let completed = RwSignal::new(load_completed(&store, &identity));
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(Option::<String>::None);

    // Marks changed in another view or tab: re-read both records.
    let sub = {
        let store = Arc::clone(&store);
        let identity = identity.clone();
        notifier.subscribe(Topic::Resources, move || {
            bookmarks.set(load_bookmarks(&store, &identity));
            completed.set(load_completed(&store, &identity));
        })
    };
    {
        let notifier = Arc::clone(&notifier);
        on_cleanup(move || notifier.unsubscribe(&sub));
    }

    let toggle_bookmark = {
        let store = Arc::clone(&store);
        let notifier = Arc::clone(&notifier);
        let identity = identity.clone();
        Callback::new(move |id: String| {
            let mut list = bookmarks.get_untracked();
            let added = toggle_id(&mut list, &id);
            save_bookmarks(&store, &notifier, &identity, &list);
            bookmarks.set(list);
            toasts.update(|t| {
                if added {
                    t.success("Added to bookmarks");
                } else {
                    t.info("Removed from bookmarks");
                }
            });
        })
    };

    let toggle_complete = {
        let store = Arc::clone(&store);
        let notifier = Arc::clone(&notifier);
        let identity = identity.clone();
        Callback::new(move |id: String| {
            let mut list = completed.get_untracked();
            let added = toggle_id(&mut list, &id);
            save_completed(&store, &notifier, &identity, &list);
            completed.set(list);
            toasts.update(|t| {
                if added {
                    t.success("Marked as completed");
                } else {
                    t.info("Marked as incomplete");
                }
            });
        })
    };

    let items = catalog();

    view! {
        <div class="resources-page">
            <header class="resources-page__header">
                <h1>"Resources"</h1>
                <input
                    class="resources-page__search"
                    type="search"
                    placeholder="Search resources"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>

            <div class="resources-page__categories">
                <button
                    class="chip"
                    class:chip--active=move || category.get().is_none()
                    on:click=move |_| category.set(None)
                >
                    "All"
                </button>
                {CATEGORIES
                    .into_iter()
                    .map(|c| {
                        view! {
                            <button
                                class="chip"
                                class:chip--active=move || category.get().as_deref() == Some(c)
                                on:click=move |_| category.set(Some(c.to_owned()))
                            >
                                {c}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="resources-page__grid">
                {move || {
                    let current_query = query.get();
                    let current_category = category.get();
                    filter_resources(&items, &current_query, current_category.as_deref())
                        .into_iter()
                        .map(|item| {
                            let id = item.id;
                            let on_bookmark = {
                                let toggle_bookmark = toggle_bookmark;
                                Callback::new(move |()| toggle_bookmark.run(id.to_owned()))
                            };
                            let on_complete = {
                                let toggle_complete = toggle_complete;
                                Callback::new(move |()| toggle_complete.run(id.to_owned()))
                            };
                            view! {
                                <ResourceCard
                                    title=item.title
                                    category=item.category
                                    kind=item.kind
                                    url=item.url
                                    bookmarked=Signal::derive(move || {
                                        bookmarks.get().iter().any(|b| b == id)
                                    })
                                    completed=Signal::derive(move || {
                                        completed.get().iter().any(|c| c == id)
                                    })
                                    on_bookmark=on_bookmark
                                    on_complete=on_complete
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
