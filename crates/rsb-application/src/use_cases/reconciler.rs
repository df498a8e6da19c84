//! Reconciliation Use Case
//!
//! Makes the remote group roster equal to the desired member set.
//!
//! The run adds every desired user first and only then removes the users that
//! should not be there, so a host member is never briefly missing from the
//! remote group. The add endpoint is expected to accept users that are
//! already members.

use rsb_domain::error::{Error, Result};
use rsb_domain::ports::SharedRemoteClient;
use rsb_domain::{MembershipAction, ReconciliationReport, UserSet};
use tracing::info;

/// Two-phase reconciler bound to one remote client
pub struct Reconciler {
    remote: SharedRemoteClient,
    debug: bool,
}

impl Reconciler {
    /// Create a reconciler; `debug` logs every intermediate step
    pub fn new(remote: SharedRemoteClient, debug: bool) -> Self {
        Self { remote, debug }
    }

    /// Reconcile the remote group with `desired`
    ///
    /// Fails with a reconciliation error when the remote membership observed
    /// after the remove phase differs from `desired`.
    pub async fn sync(&self, desired: &UserSet) -> Result<ReconciliationReport> {
        self.apply(MembershipAction::Add, desired).await?;

        let actual = self.remote.fetch_group_members().await?;
        if self.debug {
            info!(members = %actual, "Remote membership after add phase");
        }

        let to_remove = actual.difference(desired);
        self.apply(MembershipAction::Remove, &to_remove).await?;

        let converged = self.remote.fetch_group_members().await?;
        if &converged != desired {
            return Err(Error::reconciliation(desired, &converged));
        }

        info!(
            asserted = desired.len(),
            removed = to_remove.len(),
            members = converged.len(),
            "Remote group reconciled"
        );

        Ok(ReconciliationReport {
            added: desired.clone(),
            removed: to_remove,
            members: converged,
        })
    }

    async fn apply(&self, action: MembershipAction, users: &UserSet) -> Result<()> {
        if self.debug {
            info!(action = %action, users = %users, "Applying membership change");
        }
        self.remote.apply_membership_change(action, users).await
    }
}
