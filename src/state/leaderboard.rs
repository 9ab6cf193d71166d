//! Leaderboard state: fetched rows re-sorted client-side.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use std::cmp::Ordering;

use crate::net::types::LeaderboardEntry;

/// Column the leaderboard is ordered by (always descending).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaderboardSort {
    #[default]
    TotalPoints,
    AvgScore,
    Submissions,
}

/// Sort `entries` in place, descending, with average score as the
/// tie-breaker (matching the server's default ordering).
pub fn sort_entries(entries: &mut [LeaderboardEntry], sort: LeaderboardSort) {
    entries.sort_by(|a, b| {
        let primary = match sort {
            LeaderboardSort::TotalPoints => compare_f64(b.total_points, a.total_points),
            LeaderboardSort::AvgScore => compare_f64(b.avg_code_score, a.avg_code_score),
            LeaderboardSort::Submissions => b.code_submissions.cmp(&a.code_submissions),
        };
        primary.then_with(|| compare_f64(b.avg_code_score, a.avg_code_score))
    });
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
