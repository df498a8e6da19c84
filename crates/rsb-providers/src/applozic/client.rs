//! Applozic group client

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::debug;

use rsb_domain::error::{Error, Result};
use rsb_domain::ports::RemoteGroupClient;
use rsb_domain::{
    AvatarOutcome, AvatarWarning, BridgeSettings, MembershipAction, UserSet, Username,
};

use super::types::{
    GroupInfoEnvelope, MembershipChangeRequest, StatusEnvelope, UserUpdateRequest,
};
use crate::constants::{
    APPLOZIC_GROUP_INFO_PATH, APPLOZIC_USER_UPDATE_PATH, CONTENT_TYPE_JSON,
    HEADER_APPLICATION_KEY, HEADER_OF_USER_ID,
};
use crate::utils::HttpResponseUtils;

const SERVICE: &str = "Applozic";

fn remote_error(message: String) -> Error {
    Error::remote(message)
}

/// Applozic REST client bound to one settings snapshot
///
/// Credentials are checked before every request; a blank setting fails the
/// call with a configuration error naming every missing field and no request
/// is sent. Only HTTP 200 is accepted as success.
pub struct ApplozicClient {
    http_client: Client,
    base_url: String,
    settings: BridgeSettings,
}

impl ApplozicClient {
    /// Create a client
    ///
    /// # Arguments
    /// * `http_client` - Shared reqwest client
    /// * `base_url` - API origin, without trailing slash
    /// * `settings` - Settings snapshot providing credentials and group id
    pub fn new<S: Into<String>>(
        http_client: Client,
        base_url: S,
        settings: BridgeSettings,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            settings,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fixed headers sent with every request
    fn headers(&self) -> Result<HeaderMap> {
        self.settings.validate_credentials()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(HEADER_APPLICATION_KEY),
            header_value("application_key", &self.settings.application_key)?,
        );
        headers.insert(
            AUTHORIZATION,
            header_value(
                "authorization",
                &format!("Basic {}", self.settings.authorization),
            )?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        Ok(headers)
    }

    async fn send(&self, request: RequestBuilder, context: &str) -> Result<reqwest::Response> {
        request
            .send()
            .await
            .map_err(|e| Error::remote_with_source(format!("{SERVICE} {context} failed"), e))
    }

    async fn post_status(&self, request: RequestBuilder, context: &str) -> Result<StatusEnvelope> {
        let response = self.send(request, context).await?;
        HttpResponseUtils::check_and_parse(response, StatusCode::OK, SERVICE, remote_error).await
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        Error::configuration_with_source(format!("setting {field} is not a valid header value"), e)
    })
}

#[async_trait]
impl RemoteGroupClient for ApplozicClient {
    async fn fetch_group_members(&self) -> Result<UserSet> {
        let headers = self.headers()?;
        let request = self
            .http_client
            .get(self.url(APPLOZIC_GROUP_INFO_PATH))
            .headers(headers)
            .query(&[("clientGroupId", self.settings.client_group_id.as_str())]);

        let response = self.send(request, "group info request").await?;
        let envelope: GroupInfoEnvelope =
            HttpResponseUtils::check_and_parse(response, StatusCode::OK, SERVICE, remote_error)
                .await?;

        Ok(envelope.response.members_id.into_iter().collect())
    }

    async fn apply_membership_change(
        &self,
        action: MembershipAction,
        users: &UserSet,
    ) -> Result<()> {
        let headers = self.headers()?;
        if users.is_empty() {
            return Ok(());
        }

        let body = MembershipChangeRequest {
            user_ids: users.iter().map(Username::as_str).collect(),
            client_group_ids: [self.settings.client_group_id.as_str()],
        };
        let mut request = self
            .http_client
            .post(self.url(&format!("/rest/ws/group/{action}/users")))
            .headers(headers)
            .json(&body);
        if action == MembershipAction::Add {
            request = request.query(&[("createNew", "true")]);
        }

        debug!(action = %action, users = %users, "Sending membership change");
        let envelope = self.post_status(request, "membership change").await?;
        if envelope.is_error() {
            return Err(Error::remote(format!(
                "{SERVICE} error {action} users [{users}]"
            )));
        }
        Ok(())
    }

    async fn update_user_avatar(
        &self,
        username: &Username,
        image_url: &str,
    ) -> Result<AvatarOutcome> {
        let mut headers = self.headers()?;
        let user_header = match HeaderValue::from_str(username.as_str()) {
            Ok(value) => value,
            Err(e) => {
                return Ok(AvatarOutcome::Rejected(AvatarWarning::new(
                    username.clone(),
                    format!("username is not a valid header value: {e}"),
                )));
            }
        };
        headers.insert(HeaderName::from_static(HEADER_OF_USER_ID), user_header);

        let request = self
            .http_client
            .post(self.url(APPLOZIC_USER_UPDATE_PATH))
            .headers(headers)
            .json(&UserUpdateRequest {
                image_link: image_url,
            });

        let outcome = match self.post_status(request, "user update").await {
            Ok(envelope) if envelope.is_error() => AvatarOutcome::Rejected(AvatarWarning::new(
                username.clone(),
                format!("{SERVICE} returned status error"),
            )),
            Ok(_) => AvatarOutcome::Updated,
            Err(e) => AvatarOutcome::Rejected(AvatarWarning::new(username.clone(), e.to_string())),
        };
        Ok(outcome)
    }
}
