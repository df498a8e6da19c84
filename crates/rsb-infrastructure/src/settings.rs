//! Live bridge settings
//!
//! [`SettingsStore`] holds the current [`BridgeSettings`] behind an
//! `ArcSwap`. Readers take a lock-free snapshot; a reload swaps in a freshly
//! loaded value without disturbing runs that already hold the old one.
//! [`SettingsSource::refresh`] reloads and falls back to the last good
//! snapshot when the sources cannot be read.

use arc_swap::ArcSwap;
use rsb_domain::BridgeSettings;
use rsb_domain::error::Result;
use rsb_domain::ports::SettingsSource;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ConfigLoader;

/// Swappable settings snapshot, optionally backed by a config loader
pub struct SettingsStore {
    current: ArcSwap<BridgeSettings>,
    loader: Option<ConfigLoader>,
}

impl SettingsStore {
    /// Store fixed settings; [`reload`](Self::reload) keeps them unchanged
    pub fn new(initial: BridgeSettings) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
            loader: None,
        }
    }

    /// Store `initial`, reloading from `loader` on demand
    pub fn with_loader(loader: ConfigLoader, initial: BridgeSettings) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
            loader: Some(loader),
        }
    }

    /// Re-read the settings from the configuration sources
    ///
    /// On failure the previous snapshot stays in place.
    pub fn reload(&self) -> Result<BridgeSettings> {
        let Some(loader) = &self.loader else {
            return Ok(self.current());
        };

        let settings = loader.reload()?.bridge;
        let previous = self.current.swap(Arc::new(settings.clone()));
        if *previous != settings {
            info!(
                enabled = settings.enabled,
                group = %settings.group_name,
                "Bridge settings changed"
            );
        } else {
            debug!("Bridge settings unchanged");
        }
        Ok(settings)
    }
}

impl SettingsSource for SettingsStore {
    fn current(&self) -> BridgeSettings {
        self.current.load().as_ref().clone()
    }

    fn refresh(&self) -> BridgeSettings {
        self.reload().unwrap_or_else(|e| {
            warn!(error = %e, "Settings reload failed, keeping previous settings");
            self.current()
        })
    }
}
