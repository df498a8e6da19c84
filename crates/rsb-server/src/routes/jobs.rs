//! Manual job trigger

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, post};
use rsb_domain::Job;
use serde::Serialize;
use tracing::info;

use super::ErrorResponse;
use super::auth::WebhookAuth;
use crate::state::ServerState;

/// Trigger response body
#[derive(Debug, Serialize)]
pub struct JobAccepted {
    /// Name of the queued job
    pub job: &'static str,
}

/// `POST /jobs/<name>`
#[post("/jobs/<name>")]
pub fn trigger_job(
    _auth: WebhookAuth,
    state: &State<ServerState>,
    name: &str,
) -> Result<(Status, Json<JobAccepted>), (Status, Json<ErrorResponse>)> {
    let job = Job::periodic(name).ok_or_else(|| {
        (
            Status::NotFound,
            Json(ErrorResponse::new(
                "unknown_job",
                format!("no periodic job named '{name}'"),
            )),
        )
    })?;

    let job_name = job.name();
    state.queue.enqueue(job).map_err(|e| {
        (
            Status::ServiceUnavailable,
            Json(ErrorResponse::new("queue_unavailable", e.to_string())),
        )
    })?;

    info!(job = job_name, "Job triggered manually");
    Ok((Status::Accepted, Json(JobAccepted { job: job_name })))
}
