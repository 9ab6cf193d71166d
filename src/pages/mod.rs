//! Top-level page components, one per route.

pub mod arena;
pub mod auth;
pub mod dashboard;
pub mod leaderboard;
pub mod profile;
pub mod resources;
pub mod settings;
pub mod tutor;
