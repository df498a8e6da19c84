//! Background jobs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{JOB_MODIFY_USER, JOB_SYNC_AVATARS, JOB_SYNC_USERS};
use crate::value_objects::{
    AvatarSyncReport, MembershipAction, ReconciliationReport, Username,
};

/// Unit of work placed on the job queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "job", rename_all = "snake_case")]
pub enum Job {
    /// Reconcile the whole remote group with the host group
    SyncUsers,
    /// Push profile images for every remote member
    SyncAvatars,
    /// Apply one membership change
    ModifyUser {
        /// Add or remove
        action: MembershipAction,
        /// Affected user
        username: Username,
    },
}

impl Job {
    /// Stable job name, used in logs and the manual trigger endpoint
    pub fn name(&self) -> &'static str {
        match self {
            Self::SyncUsers => JOB_SYNC_USERS,
            Self::SyncAvatars => JOB_SYNC_AVATARS,
            Self::ModifyUser { .. } => JOB_MODIFY_USER,
        }
    }

    /// Look up a periodic job by name
    pub fn periodic(name: &str) -> Option<Self> {
        match name {
            JOB_SYNC_USERS => Some(Self::SyncUsers),
            JOB_SYNC_AVATARS => Some(Self::SyncAvatars),
            _ => None,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModifyUser { action, username } => {
                write!(f, "{}({action} {username})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// What a job run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Integration disabled; nothing was done
    Disabled,
    /// Reconciliation finished and converged
    Reconciled(ReconciliationReport),
    /// Avatar batch finished
    AvatarsSynced(AvatarSyncReport),
    /// Single membership change applied
    MemberChanged {
        /// Add or remove
        action: MembershipAction,
        /// Affected user
        username: Username,
    },
}
