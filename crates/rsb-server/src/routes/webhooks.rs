//! Membership webhook
//!
//! Accepts host notifications and hands them to the event handler. The
//! handler only enqueues, so the response is sent before any remote call.
//! It refreshes settings from the configuration sources first, which runs on
//! the blocking pool.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, post};
use rsb_application::EventDisposition;
use rsb_domain::{MembershipEvent, MembershipEventKind, Username};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::ErrorResponse;
use super::auth::WebhookAuth;
use crate::state::ServerState;

/// Webhook request body
#[derive(Debug, Deserialize)]
pub struct MembershipPayload {
    /// `user_added_to_group` or `user_removed_from_group`
    pub event: String,
    /// Affected user
    pub username: String,
    /// Host group name
    pub group: String,
}

/// Webhook response body
#[derive(Debug, Serialize)]
pub struct MembershipResponse {
    /// What the bridge did with the event
    pub disposition: &'static str,
}

type WebhookResult = Result<(Status, Json<MembershipResponse>), (Status, Json<ErrorResponse>)>;

/// `POST /webhooks/membership`
#[post("/webhooks/membership", format = "json", data = "<payload>")]
pub async fn membership(
    _auth: WebhookAuth,
    state: &State<ServerState>,
    payload: Json<MembershipPayload>,
) -> WebhookResult {
    let payload = payload.into_inner();
    let kind = MembershipEventKind::from_name(&payload.event).ok_or_else(|| {
        bad_request(
            "unknown_event",
            format!("unsupported event '{}'", payload.event),
        )
    })?;
    let username = Username::new(payload.username)
        .map_err(|e| bad_request("invalid_username", e.to_string()))?;

    let event = MembershipEvent {
        kind,
        username,
        group: payload.group,
    };
    let events = state.events.clone();
    let disposition = tokio::task::spawn_blocking(move || events.handle(&event))
        .await
        .map_err(|e| {
            error!(event = kind.as_str(), error = %e, "Webhook handler task failed");
            (
                Status::InternalServerError,
                Json(ErrorResponse::new("internal_error", e.to_string())),
            )
        })?;
    let status = match disposition {
        EventDisposition::Enqueued => Status::Accepted,
        EventDisposition::Disabled | EventDisposition::OtherGroup => Status::Ok,
        EventDisposition::Dropped => {
            warn!(event = kind.as_str(), "Webhook event dropped");
            Status::ServiceUnavailable
        }
    };

    Ok((
        status,
        Json(MembershipResponse {
            disposition: disposition.as_str(),
        }),
    ))
}

fn bad_request(error: &'static str, message: String) -> (Status, Json<ErrorResponse>) {
    (Status::BadRequest, Json(ErrorResponse::new(error, message)))
}
