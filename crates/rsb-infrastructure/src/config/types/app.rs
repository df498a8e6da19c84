//! Root application configuration

use rsb_domain::BridgeSettings;
use rsb_providers::DiscourseConfig;
use serde::{Deserialize, Serialize};

use super::{LoggingConfig, RemoteConfig, ScheduleConfig, ServerConfig};

/// Root configuration
///
/// Every section falls back to its defaults so a partial TOML file or a
/// handful of environment variables is enough to start the bridge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Operator-facing bridge settings
    pub bridge: BridgeSettings,
    /// Messaging service connection
    pub remote: RemoteConfig,
    /// Host platform connection
    pub host: DiscourseConfig,
    /// Periodic job intervals
    pub schedule: ScheduleConfig,
    /// HTTP surface
    pub server: ServerConfig,
    /// Logging
    pub logging: LoggingConfig,
}
