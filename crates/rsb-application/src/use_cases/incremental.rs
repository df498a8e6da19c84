//! Incremental Membership Use Case

use rsb_domain::error::Result;
use rsb_domain::ports::SharedRemoteClient;
use rsb_domain::{MembershipAction, UserSet, Username};
use tracing::debug;

/// Applies one membership change to the remote group
pub struct IncrementalUpdater {
    remote: SharedRemoteClient,
}

impl IncrementalUpdater {
    /// Create an updater bound to `remote`
    pub fn new(remote: SharedRemoteClient) -> Self {
        Self { remote }
    }

    /// Add or remove a single user
    pub async fn apply(&self, action: MembershipAction, username: &Username) -> Result<()> {
        debug!(action = %action, username = %username, "Applying single membership change");
        self.remote
            .apply_membership_change(action, &UserSet::from(username.clone()))
            .await
    }
}
