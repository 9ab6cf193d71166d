//! Dashboard stat card.

use leptos::prelude::*;

/// One labeled figure on the dashboard grid.
#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            {hint.map(|h| view! { <span class="stat-card__hint">{h}</span> })}
        </div>
    }
}
