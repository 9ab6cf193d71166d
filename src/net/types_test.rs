use super::*;

// =============================================================
// Tolerant deserialization
// =============================================================

#[test]
fn user_ignores_extra_fields() {
    let raw = r#"{
        "id": "u1",
        "email": "ada@example.com",
        "name": "Ada",
        "role": "student",
        "created_at": "2024-01-01T00:00:00Z",
        "some_future_field": 42
    }"#;
    let user: User = serde_json::from_str(raw).expect("user");
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, "student");
}

#[test]
fn user_tolerates_missing_fields() {
    let user: User = serde_json::from_str("{}").expect("user");
    assert!(user.id.is_empty());
    assert!(user.email.is_empty());
}

#[test]
fn dashboard_stats_default_missing_counters_to_zero() {
    let raw = r#"{ "code_submissions": 12, "avg_code_score": 84.5 }"#;
    let stats: DashboardStats = serde_json::from_str(raw).expect("stats");
    assert_eq!(stats.code_submissions, 12);
    assert_eq!(stats.avg_code_score, 84.5);
    assert_eq!(stats.coding_display_current_streak, 0);
    assert_eq!(stats.interviews_taken, 0);
}

#[test]
fn profile_response_profile_data_is_optional() {
    let raw = r#"{
        "id": "u1",
        "email": "ada@example.com",
        "name": "Ada",
        "role": "student",
        "created_at": "2024-01-01T00:00:00Z"
    }"#;
    let profile: ProfileResponse = serde_json::from_str(raw).expect("profile");
    assert!(profile.profile_data.is_none());
    assert!(profile.avatar_url.is_none());
}

#[test]
fn leaderboard_rows_parse_from_server_shape() {
    let raw = r#"[{
        "id": "u1",
        "name": "Ada",
        "email": "ada@example.com",
        "avg_code_score": 91.25,
        "code_submissions": 8,
        "total_points": 730.0
    }]"#;
    let rows: Vec<LeaderboardEntry> = serde_json::from_str(raw).expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].code_submissions, 8);
}

// =============================================================
// Request serialization
// =============================================================

#[test]
fn profile_update_omits_absent_fields() {
    let update = ProfileUpdate { name: None, profile_data: None };
    let raw = serde_json::to_string(&update).expect("serialize");
    assert_eq!(raw, "{}");
}

#[test]
fn tutor_request_includes_optional_context() {
    let req = TutorRequest {
        message: "explain binary search".to_owned(),
        topic: Some("dsa".to_owned()),
        difficulty: None,
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value["topic"], "dsa");
    assert!(value.get("difficulty").is_none());
}
