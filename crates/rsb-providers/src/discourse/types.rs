//! Discourse wire types

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct GroupEnvelope {
    pub group: GroupBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupBody {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub user_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MembersPage {
    #[serde(default)]
    pub members: Vec<MemberBody>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemberBody {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageMeta {
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: UserBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserBody {
    #[serde(default)]
    pub avatar_template: Option<String>,
}
