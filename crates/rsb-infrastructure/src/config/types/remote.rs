//! Messaging service configuration

use rsb_providers::constants::APPLOZIC_BASE_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::DEFAULT_REMOTE_TIMEOUT_SECS;

/// Messaging service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// API origin
    pub base_url: String,
    /// Transport timeout per request, in seconds
    pub timeout_secs: u64,
}

impl RemoteConfig {
    /// Transport timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: APPLOZIC_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }
}
