//! Bridge settings
//!
//! The settings an operator configures for the bridge. A snapshot is taken at
//! the start of each job run and stays immutable for that run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Operator-facing bridge settings
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    /// Master switch for scheduled jobs and event subscriptions
    pub enabled: bool,
    /// Messaging service application key
    pub application_key: String,
    /// Basic authorization token for the messaging service
    pub authorization: String,
    /// Remote client group id
    pub client_group_id: String,
    /// Name of the host group mirrored into the remote group
    pub group_name: String,
    /// Log intermediate reconciliation state
    pub debug: bool,
}

impl BridgeSettings {
    /// Names of the remote credentials that are blank
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("application_key", &self.application_key),
            ("authorization", &self.authorization),
            ("client_group_id", &self.client_group_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Fail with a single configuration error listing every blank credential
    pub fn validate_credentials(&self) -> Result<()> {
        let missing = self.missing_credentials();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::missing_settings(&missing))
        }
    }

    /// Fail with a configuration error listing every blank required setting
    pub fn validate(&self) -> Result<()> {
        let mut missing = self.missing_credentials();
        if self.group_name.trim().is_empty() {
            missing.push("group_name");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::missing_settings(&missing))
        }
    }

    /// Whether `name` is the configured host group
    pub fn is_target_group(&self, name: &str) -> bool {
        let target = self.group_name.trim();
        !target.is_empty() && target == name.trim()
    }
}

impl fmt::Debug for BridgeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeSettings")
            .field("enabled", &self.enabled)
            .field("application_key", &redact(&self.application_key))
            .field("authorization", &redact(&self.authorization))
            .field("client_group_id", &self.client_group_id)
            .field("group_name", &self.group_name)
            .field("debug", &self.debug)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() { "<unset>" } else { "<redacted>" }
}
