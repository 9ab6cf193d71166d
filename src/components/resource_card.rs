//! Resource catalog card with bookmark / completed toggles.

use leptos::prelude::*;

/// One catalog entry. The page owns the mark state; the card only reports
/// toggle clicks back through callbacks.
#[component]
pub fn ResourceCard(
    title: &'static str,
    category: &'static str,
    kind: &'static str,
    url: &'static str,
    bookmarked: Signal<bool>,
    completed: Signal<bool>,
    on_bookmark: Callback<()>,
    on_complete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="resource-card" class:resource-card--done=move || completed.get()>
            <div class="resource-card__meta">
                <span class="resource-card__category">{category}</span>
                <span class="resource-card__kind">{kind}</span>
            </div>
            <a class="resource-card__title" href=url target="_blank" rel="noreferrer">
                {title}
            </a>
            <div class="resource-card__actions">
                <button
                    class="btn btn--ghost"
                    class:btn--active=move || bookmarked.get()
                    on:click=move |_| on_bookmark.run(())
                >
                    {move || if bookmarked.get() { "Bookmarked" } else { "Bookmark" }}
                </button>
                <button
                    class="btn btn--ghost"
                    class:btn--active=move || completed.get()
                    on:click=move |_| on_complete.run(())
                >
                    {move || if completed.get() { "Completed" } else { "Mark complete" }}
                </button>
            </div>
        </div>
    }
}
