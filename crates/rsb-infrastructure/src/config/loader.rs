//! Configuration loader
//!
//! Loads [`AppConfig`] from defaults, a TOML file and `RSB__` environment
//! variables, then validates the result.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rsb_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default found)
    /// 3. Environment variables, e.g. `RSB__BRIDGE__GROUP_NAME`
    pub fn load(&self) -> Result<AppConfig> {
        self.load_sources(true)
    }

    /// Load configuration again without logging which file was read
    ///
    /// Used for the per-event and per-job settings refresh.
    pub fn reload(&self) -> Result<AppConfig> {
        self.load_sources(false)
    }

    fn load_sources(&self, log_source: bool) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            let exists = config_path.exists();
            if exists {
                figment = figment.merge(Toml::file(config_path));
            }
            if log_source {
                log_config_loaded(config_path, exists);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            if log_source {
                log_config_loaded(&default_path, true);
            }
        }

        let prefix = format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}");
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::configuration(format!("Failed to extract configuration: {e}")))?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Bridge credentials are not checked here; every messaging service call
/// validates them itself.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_schedule_config(config)?;
    validate_server_config(config)?;
    validate_remote_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_schedule_config(config: &AppConfig) -> Result<()> {
    if config.schedule.sync_interval_secs == 0 {
        return Err(Error::configuration("Sync interval cannot be 0"));
    }
    if config.schedule.avatar_interval_secs == 0 {
        return Err(Error::configuration("Avatar sync interval cannot be 0"));
    }
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_remote_config(config: &AppConfig) -> Result<()> {
    if config.remote.base_url.trim().is_empty() {
        return Err(Error::configuration("Remote base_url cannot be empty"));
    }
    if config.remote.timeout_secs == 0 {
        return Err(Error::configuration("Remote timeout cannot be 0"));
    }
    Ok(())
}
