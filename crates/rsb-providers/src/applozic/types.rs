//! Applozic wire types

use serde::{Deserialize, Serialize};

/// `GET /group/v2/info` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct GroupInfoEnvelope {
    pub response: GroupInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroupInfo {
    pub members_id: Vec<String>,
}

/// Body shared by the add and remove endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MembershipChangeRequest<'a> {
    pub user_ids: Vec<&'a str>,
    pub client_group_ids: [&'a str; 1],
}

/// Body of the user update endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserUpdateRequest<'a> {
    pub image_link: &'a str,
}

/// Status envelope returned by write endpoints
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatusEnvelope {
    #[serde(default)]
    pub status: Option<String>,
}

impl StatusEnvelope {
    pub fn is_error(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(crate::constants::APPLOZIC_STATUS_ERROR))
    }
}
