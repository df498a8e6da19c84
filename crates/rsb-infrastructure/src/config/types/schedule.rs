//! Job schedule configuration

use rsb_domain::constants::{SYNC_AVATARS_INTERVAL_SECS, SYNC_USERS_INTERVAL_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Intervals of the periodic jobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Seconds between reconciliation runs
    pub sync_interval_secs: u64,
    /// Seconds between avatar sync runs
    pub avatar_interval_secs: u64,
    /// Enqueue both jobs immediately at startup
    pub run_on_startup: bool,
}

impl ScheduleConfig {
    /// Reconciliation period
    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs)
    }

    /// Avatar sync period
    pub fn avatar_interval(&self) -> Duration {
        Duration::from_secs(self.avatar_interval_secs)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            sync_interval_secs: SYNC_USERS_INTERVAL_SECS,
            avatar_interval_secs: SYNC_AVATARS_INTERVAL_SECS,
            run_on_startup: false,
        }
    }
}
