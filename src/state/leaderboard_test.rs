use super::*;
use crate::net::types::LeaderboardEntry;

fn entry(name: &str, avg: f64, submissions: u32, points: f64) -> LeaderboardEntry {
    LeaderboardEntry {
        id: name.to_owned(),
        name: name.to_owned(),
        email: format!("{name}@example.com"),
        avg_code_score: avg,
        code_submissions: submissions,
        total_points: points,
    }
}

fn names(entries: &[LeaderboardEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

// =============================================================
// Sort orders
// =============================================================

#[test]
fn default_sort_is_total_points_descending() {
    let mut entries = vec![
        entry("low", 90.0, 1, 90.0),
        entry("high", 80.0, 5, 400.0),
        entry("mid", 85.0, 2, 170.0),
    ];
    sort_entries(&mut entries, LeaderboardSort::TotalPoints);
    assert_eq!(names(&entries), vec!["high", "mid", "low"]);
}

#[test]
fn avg_score_sort_reorders() {
    let mut entries = vec![
        entry("low", 70.0, 5, 350.0),
        entry("high", 95.0, 1, 95.0),
    ];
    sort_entries(&mut entries, LeaderboardSort::AvgScore);
    assert_eq!(names(&entries), vec!["high", "low"]);
}

#[test]
fn submissions_sort_breaks_ties_by_avg_score() {
    let mut entries = vec![
        entry("weaker", 70.0, 3, 210.0),
        entry("stronger", 90.0, 3, 270.0),
    ];
    sort_entries(&mut entries, LeaderboardSort::Submissions);
    assert_eq!(names(&entries), vec!["stronger", "weaker"]);
}

#[test]
fn sort_handles_empty_input() {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    sort_entries(&mut entries, LeaderboardSort::TotalPoints);
    assert!(entries.is_empty());
}
