//! Outcome types returned by the use cases

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{UserSet, Username};

/// Result of a successful reconciliation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Users asserted as members during the add phase
    pub added: UserSet,
    /// Users removed during the remove phase
    pub removed: UserSet,
    /// Remote membership observed after the run
    pub members: UserSet,
}

/// Non-fatal avatar update failure for a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarWarning {
    /// User whose avatar could not be pushed
    pub username: Username,
    /// What went wrong
    pub message: String,
}

impl AvatarWarning {
    /// Create a warning for `username`
    pub fn new<S: Into<String>>(username: Username, message: S) -> Self {
        Self {
            username,
            message: message.into(),
        }
    }
}

impl fmt::Display for AvatarWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "avatar update for {} failed: {}", self.username, self.message)
    }
}

/// Outcome of a single avatar update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarOutcome {
    /// Remote accepted the new image link
    Updated,
    /// Remote (or transport) rejected the update; processing continues
    Rejected(AvatarWarning),
}

/// Result of an avatar sync batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarSyncReport {
    /// Number of avatars accepted by the remote
    pub updated: usize,
    /// Members without a host-side profile image
    pub skipped: UserSet,
    /// Per-user failures
    pub warnings: Vec<AvatarWarning>,
}
