//! Settings Source Port

use std::sync::Arc;

use crate::value_objects::BridgeSettings;

/// Source of the live bridge settings
///
/// Each call returns a fresh snapshot so that settings changed by the
/// operator apply to the next job run.
pub trait SettingsSource: Send + Sync {
    /// Current settings snapshot
    fn current(&self) -> BridgeSettings;

    /// Re-read the backing configuration and return the fresh snapshot
    ///
    /// May block on I/O. Sources without a backing store return
    /// [`current`](Self::current); a failed re-read falls back to it too.
    fn refresh(&self) -> BridgeSettings {
        self.current()
    }
}

/// Shared settings source
pub type SharedSettingsSource = Arc<dyn SettingsSource>;

impl SettingsSource for BridgeSettings {
    fn current(&self) -> BridgeSettings {
        self.clone()
    }
}
