//! Wire types for the backend REST API.
//!
//! The backend returns more fields than the client consumes; everything here
//! is tolerant of extras and of omitted optional fields, so a backend deploy
//! never breaks deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `/api/auth/me` and inside
/// [`AuthResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: String,
}

/// `POST /api/auth/login` / `POST /api/auth/register` response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// `GET /api/profile` response: the user plus their stored profile document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: String,
    pub avatar_url: Option<String>,
    pub profile_data: Option<serde_json::Value>,
    pub updated_at: Option<String>,
}

/// `PUT /api/profile` request body. Absent fields are left untouched
/// server-side.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_data: Option<serde_json::Value>,
}

/// `GET /api/dashboard/stats` response (the subset the client renders).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub code_submissions: u32,
    pub avg_code_score: f64,
    pub resume_analyses: u32,
    pub interviews_taken: u32,
    pub learning_sessions: u32,
    pub career_readiness_score: f64,
    pub learning_consistency_score: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub login_display_current_streak: u32,
    pub coding_display_current_streak: u32,
}

/// `POST /api/tutor/chat` request body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TutorRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// `POST /api/tutor/chat` response.
#[derive(Clone, Debug, Deserialize)]
pub struct TutorReply {
    pub response: String,
    pub session_id: String,
}

/// `POST /api/code/evaluate` request body.
#[derive(Clone, Debug, Serialize)]
pub struct CodeSubmissionRequest {
    pub code: String,
    pub language: String,
    pub problem_id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// `POST /api/code/evaluate` response.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CodeEvaluation {
    pub id: String,
    pub problem_id: String,
    pub language: String,
    pub evaluation: String,
    pub passed: bool,
    pub suggestions: String,
    pub score: i32,
    pub created_at: String,
}

/// One row of `GET /api/leaderboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avg_code_score: f64,
    pub code_submissions: u32,
    pub total_points: f64,
}
