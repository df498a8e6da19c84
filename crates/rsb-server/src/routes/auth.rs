//! Webhook authentication
//!
//! When a token is configured, guarded routes require a matching
//! `X-Webhook-Token` header. Without a token every request is accepted.

use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};

/// Header carrying the shared webhook secret
pub const WEBHOOK_TOKEN_HEADER: &str = "X-Webhook-Token";

/// Webhook authentication configuration
#[derive(Debug, Clone, Default)]
pub struct WebhookAuthConfig {
    /// Expected token; `None` disables the check
    pub token: Option<String>,
}

impl WebhookAuthConfig {
    /// Create from an optional token, treating a blank token as unset
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Whether `provided` matches the configured token
    pub fn validate(&self, provided: Option<&str>) -> bool {
        match (&self.token, provided) {
            (None, _) => true,
            (Some(expected), Some(provided)) => expected == provided,
            (Some(_), None) => false,
        }
    }
}

/// Request guard for webhook authentication
pub struct WebhookAuth;

/// Error type for webhook authentication failures
#[derive(Debug)]
pub enum WebhookAuthError {
    /// Token missing or wrong
    InvalidToken,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for WebhookAuth {
    type Error = WebhookAuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(config) = request.rocket().state::<WebhookAuthConfig>() else {
            return Outcome::Success(WebhookAuth);
        };

        if config.validate(request.headers().get_one(WEBHOOK_TOKEN_HEADER)) {
            Outcome::Success(WebhookAuth)
        } else {
            Outcome::Error((Status::Unauthorized, WebhookAuthError::InvalidToken))
        }
    }
}
