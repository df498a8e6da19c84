//! Membership actions and host events

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{EVENT_USER_ADDED_TO_GROUP, EVENT_USER_REMOVED_FROM_GROUP};
use crate::value_objects::Username;

/// Change applied to the remote group roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipAction {
    /// Add users to the remote group
    Add,
    /// Remove users from the remote group
    Remove,
}

impl MembershipAction {
    /// Lowercase action name, as used in remote endpoint paths
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for MembershipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of host platform membership notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipEventKind {
    /// A user joined a host group
    UserAddedToGroup,
    /// A user left a host group
    UserRemovedFromGroup,
}

impl MembershipEventKind {
    /// Remote action that mirrors this event
    pub fn action(self) -> MembershipAction {
        match self {
            Self::UserAddedToGroup => MembershipAction::Add,
            Self::UserRemovedFromGroup => MembershipAction::Remove,
        }
    }

    /// Look up an event kind by its host event name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            EVENT_USER_ADDED_TO_GROUP => Some(Self::UserAddedToGroup),
            EVENT_USER_REMOVED_FROM_GROUP => Some(Self::UserRemovedFromGroup),
            _ => None,
        }
    }

    /// Host event name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserAddedToGroup => EVENT_USER_ADDED_TO_GROUP,
            Self::UserRemovedFromGroup => EVENT_USER_REMOVED_FROM_GROUP,
        }
    }
}

/// Host platform notification that a user joined or left a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipEvent {
    /// What happened
    #[serde(rename = "event")]
    pub kind: MembershipEventKind,
    /// Affected user
    pub username: Username,
    /// Name of the host group
    pub group: String,
}

impl MembershipEvent {
    /// Create a "user added to group" event
    pub fn added<U: Into<Username>, G: Into<String>>(username: U, group: G) -> Self {
        Self {
            kind: MembershipEventKind::UserAddedToGroup,
            username: username.into(),
            group: group.into(),
        }
    }

    /// Create a "user removed from group" event
    pub fn removed<U: Into<Username>, G: Into<String>>(username: U, group: G) -> Self {
        Self {
            kind: MembershipEventKind::UserRemovedFromGroup,
            username: username.into(),
            group: group.into(),
        }
    }
}

/// Group on the host platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostGroup {
    /// Host-side group id, when the platform exposes one
    pub id: Option<u64>,
    /// Group name
    pub name: String,
    /// Member count reported by the host, if any
    pub member_count: Option<usize>,
}

impl HostGroup {
    /// Create a group handle from its name
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            id: None,
            name: name.into(),
            member_count: None,
        }
    }
}
