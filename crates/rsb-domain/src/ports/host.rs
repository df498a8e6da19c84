//! Host Directory Port
//!
//! Read-only view of the community platform's groups and users.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{HostGroup, UserSet, Username};

/// Host platform lookups needed by the jobs
#[async_trait]
pub trait HostDirectory: Send + Sync {
    /// Find a group by name; `Ok(None)` when it does not exist
    async fn find_group(&self, name: &str) -> Result<Option<HostGroup>>;

    /// Usernames of every member of `group`
    async fn group_members(&self, group: &HostGroup) -> Result<UserSet>;

    /// Absolute profile image URL for `username`, if the user has one
    async fn avatar_url(&self, username: &Username) -> Result<Option<String>>;
}

/// Shared host directory
pub type SharedHostDirectory = Arc<dyn HostDirectory>;
