//! Leaderboard page: fetched once, re-sorted client-side.

use leptos::prelude::*;

use crate::state::leaderboard::{LeaderboardSort, sort_entries};

/// Leaderboard page.
#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let rows = LocalResource::new(|| crate::net::api::fetch_leaderboard(25));
    let sort = RwSignal::new(LeaderboardSort::default());

    let sort_button = move |label: &'static str, key: LeaderboardSort| {
        view! {
            <button
                class="tab"
                class:tab--active=move || sort.get() == key
                on:click=move |_| sort.set(key)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="leaderboard-page">
            <header class="leaderboard-page__header">
                <h1>"Leaderboard"</h1>
                <div class="leaderboard-page__sort">
                    {sort_button("Points", LeaderboardSort::TotalPoints)}
                    {sort_button("Avg score", LeaderboardSort::AvgScore)}
                    {sort_button("Submissions", LeaderboardSort::Submissions)}
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading leaderboard..."</p> }>
                {move || {
                    rows.get()
                        .map(|maybe| {
                            match maybe {
                                Some(mut entries) => {
                                    sort_entries(&mut entries, sort.get());
                                    view! {
                                        <table class="leaderboard-page__table">
                                            <thead>
                                                <tr>
                                                    <th>"#"</th>
                                                    <th>"Name"</th>
                                                    <th>"Avg score"</th>
                                                    <th>"Submissions"</th>
                                                    <th>"Points"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {entries
                                                    .into_iter()
                                                    .enumerate()
                                                    .map(|(rank, entry)| {
                                                        view! {
                                                            <tr>
                                                                <td>{rank + 1}</td>
                                                                <td>{entry.name}</td>
                                                                <td>
                                                                    {format!("{:.1}", entry.avg_code_score)}
                                                                </td>
                                                                <td>{entry.code_submissions}</td>
                                                                <td>{format!("{:.0}", entry.total_points)}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <p class="leaderboard-page__empty">
                                            "Leaderboard is unavailable right now."
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
