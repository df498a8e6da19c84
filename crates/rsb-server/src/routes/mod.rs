//! HTTP routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/health` | GET | Liveness and integration status |
//! | `/webhooks/membership` | POST | Host membership notification (guarded) |
//! | `/jobs/<name>` | POST | Enqueue `sync_users` or `sync_avatars` (guarded) |

pub mod auth;
pub mod health;
pub mod jobs;
pub mod webhooks;

use rocket::{Build, Rocket, routes};
use serde::Serialize;

use crate::state::ServerState;
use auth::WebhookAuthConfig;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: &'static str,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new<S: Into<String>>(error: &'static str, message: S) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }
}

/// Build the Rocket instance with all routes mounted
pub fn build_rocket(
    config: rocket::Config,
    state: ServerState,
    auth: WebhookAuthConfig,
) -> Rocket<Build> {
    rocket::custom(config)
        .manage(state)
        .manage(auth)
        .mount(
            "/",
            routes![
                health::health,
                webhooks::membership,
                jobs::trigger_job
            ],
        )
}
