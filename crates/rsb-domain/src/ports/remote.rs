//! Remote Group Port
//!
//! Contract for the messaging service that holds the remote group roster.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{AvatarOutcome, BridgeSettings, MembershipAction, UserSet, Username};

/// Client for the remote group roster
///
/// Implementations must check their credentials before every call and fail
/// with a configuration error without touching the network when any are
/// missing.
#[async_trait]
pub trait RemoteGroupClient: Send + Sync {
    /// Current members of the remote group
    async fn fetch_group_members(&self) -> Result<UserSet>;

    /// Add or remove `users`; an empty set must not issue a request
    async fn apply_membership_change(
        &self,
        action: MembershipAction,
        users: &UserSet,
    ) -> Result<()>;

    /// Push a profile image link for one member
    ///
    /// Remote and transport failures come back as
    /// [`AvatarOutcome::Rejected`]; only configuration errors are `Err`.
    async fn update_user_avatar(
        &self,
        username: &Username,
        image_url: &str,
    ) -> Result<AvatarOutcome>;
}

/// Shared remote client
pub type SharedRemoteClient = Arc<dyn RemoteGroupClient>;

/// Builds a remote client bound to one settings snapshot
pub trait RemoteClientFactory: Send + Sync {
    /// Create a client for `settings`
    fn create(&self, settings: &BridgeSettings) -> Result<SharedRemoteClient>;
}

/// Shared remote client factory
pub type SharedRemoteClientFactory = Arc<dyn RemoteClientFactory>;
