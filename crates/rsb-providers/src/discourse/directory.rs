//! Discourse host directory

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use rsb_domain::error::{Error, Result};
use rsb_domain::ports::HostDirectory;
use rsb_domain::{HostGroup, UserSet, Username};

use super::types::{GroupEnvelope, MembersPage, UserEnvelope};
use crate::constants::{
    DISCOURSE_AVATAR_SIZE, DISCOURSE_AVATAR_SIZE_PLACEHOLDER, DISCOURSE_MEMBERS_PAGE_SIZE,
    HEADER_DISCOURSE_API_KEY, HEADER_DISCOURSE_API_USERNAME,
};
use crate::utils::HttpResponseUtils;

const SERVICE: &str = "Discourse";

fn host_error(message: String) -> Error {
    Error::host(message)
}

/// Connection settings for a Discourse forum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscourseConfig {
    /// Forum origin, e.g. `https://forum.example.com`
    pub base_url: String,
    /// Admin API key; blank for anonymous access
    pub api_key: String,
    /// User the API key acts as
    pub api_username: String,
    /// Pixel size requested for avatars
    pub avatar_size: u32,
    /// Members fetched per page
    pub page_size: usize,
}

impl Default for DiscourseConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            api_username: "system".to_string(),
            avatar_size: DISCOURSE_AVATAR_SIZE,
            page_size: DISCOURSE_MEMBERS_PAGE_SIZE,
        }
    }
}

/// Host directory backed by the Discourse REST API
pub struct DiscourseDirectory {
    http_client: Client,
    base_url: Url,
    headers: HeaderMap,
    avatar_size: u32,
    page_size: usize,
}

impl DiscourseDirectory {
    /// Create a directory for the forum described by `config`
    pub fn new(http_client: Client, config: &DiscourseConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            Error::configuration_with_source(
                format!("invalid host base_url '{}'", config.base_url),
                e,
            )
        })?;

        let mut headers = HeaderMap::new();
        if !config.api_key.is_empty() {
            headers.insert(
                HeaderName::from_static(HEADER_DISCOURSE_API_KEY),
                header_value("api_key", &config.api_key)?,
            );
            headers.insert(
                HeaderName::from_static(HEADER_DISCOURSE_API_USERNAME),
                header_value("api_username", &config.api_username)?,
            );
        }

        Ok(Self {
            http_client,
            base_url,
            headers,
            avatar_size: config.avatar_size,
            page_size: config.page_size.max(1),
        })
    }

    /// Build `{base}/{segments...}` with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::configuration("host base_url cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url, context: &str) -> Result<reqwest::Response> {
        self.http_client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| Error::host_with_source(format!("{SERVICE} {context} failed"), e))
    }

    /// Turn an avatar template into an absolute image URL
    fn resolve_avatar(&self, template: &str) -> String {
        let size = self.avatar_size.to_string();
        let path = template.replace(DISCOURSE_AVATAR_SIZE_PLACEHOLDER, &size);
        if path.starts_with("//") {
            format!("{}:{}", self.base_url.scheme(), path)
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url.origin().ascii_serialization(), path)
        } else {
            path
        }
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        Error::configuration_with_source(format!("host {field} is not a valid header value"), e)
    })
}

#[async_trait]
impl HostDirectory for DiscourseDirectory {
    async fn find_group(&self, name: &str) -> Result<Option<HostGroup>> {
        let url = self.endpoint(&["groups", &format!("{name}.json")])?;
        let response = self.get(url, "group lookup").await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(group = name, "Host group not found");
            return Ok(None);
        }

        let envelope: GroupEnvelope =
            HttpResponseUtils::check_and_parse(response, StatusCode::OK, SERVICE, host_error)
                .await?;
        Ok(Some(HostGroup {
            id: envelope.group.id,
            name: envelope.group.name,
            member_count: envelope.group.user_count,
        }))
    }

    async fn group_members(&self, group: &HostGroup) -> Result<UserSet> {
        let mut members = UserSet::new();
        let mut offset = 0usize;

        loop {
            let mut url = self.endpoint(&["groups", &group.name, "members.json"])?;
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string())
                .append_pair("limit", &self.page_size.to_string());

            let response = self.get(url, "member listing").await?;
            let page: MembersPage =
                HttpResponseUtils::check_and_parse(response, StatusCode::OK, SERVICE, host_error)
                    .await?;

            let received = page.members.len();
            members.extend(
                page.members
                    .into_iter()
                    .filter_map(|m| Username::new(m.username).ok()),
            );
            offset += received;

            let total = page.meta.map_or(usize::MAX, |meta| meta.total);
            if received == 0 || received < self.page_size || offset >= total {
                break;
            }
        }

        debug!(group = %group.name, members = members.len(), "Listed host group members");
        Ok(members)
    }

    async fn avatar_url(&self, username: &Username) -> Result<Option<String>> {
        let url = self.endpoint(&["u", &format!("{username}.json")])?;
        let response = self.get(url, "user lookup").await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let envelope: UserEnvelope =
            HttpResponseUtils::check_and_parse(response, StatusCode::OK, SERVICE, host_error)
                .await?;
        Ok(envelope
            .user
            .avatar_template
            .filter(|t| !t.trim().is_empty())
            .map(|t| self.resolve_avatar(&t)))
    }
}
