//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token from the session cache attached when present.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. A failed fetch
//! degrades the view (empty stats, error toast); it never crashes hydration.
//! No timeout or retry beyond the HTTP client's defaults — a failed write is
//! reported once and the local optimistic state stands.

#![allow(clippy::unused_async)]

use super::types::{
    AuthResponse, CodeEvaluation, CodeSubmissionRequest, DashboardStats, LeaderboardEntry,
    ProfileResponse, ProfileUpdate, TutorReply, TutorRequest, User,
};

#[cfg(feature = "hydrate")]
fn bearer() -> Option<String> {
    crate::state::auth::cached_token().map(|t| format!("Bearer {t}"))
}

/// Pull a human-readable message out of an error response body.
///
/// The backend reports failures as `{"detail": "..."}`; fall back to the
/// status code when the body is something else.
#[cfg(feature = "hydrate")]
async fn error_message(resp: gloo_net::http::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(ErrorBody { detail: Some(detail) }) => detail,
        _ => format!("request failed with status {status}"),
    }
}

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's rejection message or a transport error string.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the backend's rejection message or a transport error string.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let auth = bearer()?;
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &auth)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the server-side profile from `/api/profile`.
/// Returns `None` when unauthenticated or on failure.
pub async fn fetch_profile() -> Option<ProfileResponse> {
    #[cfg(feature = "hydrate")]
    {
        let auth = bearer()?;
        let resp = gloo_net::http::Request::get("/api/profile")
            .header("Authorization", &auth)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ProfileResponse>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `PUT /api/profile` — best-effort sync of locally saved edits.
///
/// # Errors
///
/// Returns the backend's rejection message or a transport error string; the
/// caller keeps its optimistic local state either way.
pub async fn update_profile(update: &ProfileUpdate) -> Result<ProfileResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let auth = bearer().ok_or_else(|| "not signed in".to_owned())?;
        let resp = gloo_net::http::Request::put("/api/profile")
            .header("Authorization", &auth)
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<ProfileResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err("not available on server".to_owned())
    }
}

/// Fetch `/api/dashboard/stats`. Returns `None` on any failure.
pub async fn fetch_dashboard_stats() -> Option<DashboardStats> {
    #[cfg(feature = "hydrate")]
    {
        let auth = bearer()?;
        let resp = gloo_net::http::Request::get("/api/dashboard/stats")
            .header("Authorization", &auth)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<DashboardStats>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `POST /api/tutor/chat`.
///
/// # Errors
///
/// Returns the backend's rejection message or a transport error string.
pub async fn tutor_chat(req: &TutorRequest) -> Result<TutorReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let auth = bearer().ok_or_else(|| "not signed in".to_owned())?;
        let resp = gloo_net::http::Request::post("/api/tutor/chat")
            .header("Authorization", &auth)
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<TutorReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// `POST /api/code/evaluate`.
///
/// # Errors
///
/// Returns the backend's rejection message or a transport error string.
pub async fn evaluate_code(req: &CodeSubmissionRequest) -> Result<CodeEvaluation, String> {
    #[cfg(feature = "hydrate")]
    {
        let auth = bearer().ok_or_else(|| "not signed in".to_owned())?;
        let resp = gloo_net::http::Request::post("/api/code/evaluate")
            .header("Authorization", &auth)
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<CodeEvaluation>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Fetch `/api/leaderboard?limit=N`. Returns `None` on any failure.
pub async fn fetch_leaderboard(limit: u32) -> Option<Vec<LeaderboardEntry>> {
    #[cfg(feature = "hydrate")]
    {
        let auth = bearer()?;
        let url = format!("/api/leaderboard?limit={limit}");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &auth)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<LeaderboardEntry>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        None
    }
}

/// Log out by dropping the local session; the backend session is stateless
/// (bearer token), so no server call is required.
pub fn logout() {
    crate::state::auth::clear_session();
}
