//! Health endpoint

use rocket::serde::json::Json;
use rocket::{State, get};
use serde::Serialize;

use crate::state::ServerState;

/// Health response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests
    pub status: &'static str,
    /// Whether the integration is enabled
    pub enabled: bool,
    /// Missing bridge settings, if any
    pub missing_settings: Vec<&'static str>,
    /// Seconds since startup
    pub uptime_seconds: u64,
}

/// `GET /health`
#[get("/health")]
pub fn health(state: &State<ServerState>) -> Json<HealthResponse> {
    let settings = state.settings.current();
    let mut missing_settings = settings.missing_credentials();
    if settings.group_name.trim().is_empty() {
        missing_settings.push("group_name");
    }

    Json(HealthResponse {
        status: "ok",
        enabled: settings.enabled,
        missing_settings,
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
