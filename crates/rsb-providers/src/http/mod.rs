//! HTTP client configuration shared by the API providers

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use rsb_domain::error::{Error, Result};

use crate::constants::{
    HTTP_CLIENT_IDLE_TIMEOUT_SECS, HTTP_MAX_IDLE_PER_HOST, HTTP_REQUEST_TIMEOUT_SECS,
};

/// HTTP client configuration
///
/// Controls connection pooling and timeouts for the reqwest client shared by
/// every provider. There is no retry layer: a failed request fails the job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: HTTP_MAX_IDLE_PER_HOST,
            idle_timeout: Duration::from_secs(HTTP_CLIENT_IDLE_TIMEOUT_SECS),
            timeout: Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS),
            user_agent: format!("rsb/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Build a reqwest client from this configuration
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .pool_max_idle_per_host(self.max_idle_per_host)
            .pool_idle_timeout(self.idle_timeout)
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| Error::internal(format!("Failed to create HTTP client: {e}")))
    }
}
