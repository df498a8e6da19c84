//! Applozic client factory

use reqwest::Client;
use std::sync::Arc;

use rsb_domain::BridgeSettings;
use rsb_domain::error::Result;
use rsb_domain::ports::{RemoteClientFactory, SharedRemoteClient};

use super::ApplozicClient;

/// Builds [`ApplozicClient`]s that share one connection pool
#[derive(Clone)]
pub struct ApplozicClientFactory {
    http_client: Client,
    base_url: String,
}

impl ApplozicClientFactory {
    /// Create a factory for `base_url` reusing `http_client`
    pub fn new<S: Into<String>>(http_client: Client, base_url: S) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }
}

impl RemoteClientFactory for ApplozicClientFactory {
    fn create(&self, settings: &BridgeSettings) -> Result<SharedRemoteClient> {
        Ok(Arc::new(ApplozicClient::new(
            self.http_client.clone(),
            self.base_url.clone(),
            settings.clone(),
        )))
    }
}
