//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use rsb_domain::error::{Error, Result};

/// Maps a message onto the error variant of the calling provider
pub type ErrorFactory = fn(String) -> Error;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Require exactly `expected` as the response status
    ///
    /// Any other status is reported through `to_error` with the response
    /// body attached for diagnostics.
    pub async fn expect_status(
        response: Response,
        expected: StatusCode,
        service: &str,
        to_error: ErrorFactory,
    ) -> Result<Response> {
        let status = response.status();
        if status == expected {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let code = status.as_u16();
        let context = match code {
            401 | 403 => "authentication failed".to_string(),
            404 => "resource not found".to_string(),
            429 => "rate limit exceeded".to_string(),
            500..=599 => format!("server error ({code})"),
            _ => format!("unexpected status ({code})"),
        };
        Err(to_error(format!("{service} {context}: {body}")))
    }

    /// Decode a JSON body into `T`
    pub async fn parse_json<T: DeserializeOwned>(
        response: Response,
        service: &str,
        to_error: ErrorFactory,
    ) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| to_error(format!("{service} response parse failed: {e}")))
    }

    /// Require `expected` and decode the JSON body
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        expected: StatusCode,
        service: &str,
        to_error: ErrorFactory,
    ) -> Result<T> {
        let response = Self::expect_status(response, expected, service, to_error).await?;
        Self::parse_json(response, service, to_error).await
    }
}
