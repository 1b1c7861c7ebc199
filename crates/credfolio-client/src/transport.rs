//! Request execution against the configured backend base URL.
//!
//! Every non-2xx response is turned into a typed error here; callers never see
//! a raw status code outside of [`ApiError`].

use std::time::Duration;

use credfolio_core::ClientConfig;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, StructuredError};

pub(crate) struct Transport {
    pub(crate) client: Client,
    base_url: Url,
}

impl Transport {
    /// Builds the underlying HTTP client from an explicit configuration.
    ///
    /// The cookie store is enabled so session credentials set by the backend
    /// ride along on every request. A request deadline is applied only when
    /// the configuration carries one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`ApiError::InvalidUrl`] if the base URL does not
    /// parse.
    pub(crate) fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        // Url::join treats a base without a trailing slash as a file and
        // would drop its last path segment.
        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Resolves a path relative to the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the joined URL does not parse.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
            url: format!("{}{path}", self.base_url),
            reason: e.to_string(),
        })
    }

    /// Sends the request and decodes a 2xx body as JSON.
    ///
    /// `context` names the operation for the deserialization error message.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = Self::check_status(request.send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Sends the request and returns a 2xx body as raw bytes.
    pub(crate) async fn send_bytes(request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = Self::check_status(request.send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Passes 2xx responses through and classifies everything else.
    ///
    /// Non-2xx bodies are expected to carry `{"error_id", "message"}`; when
    /// they do not, the status alone is preserved.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let status = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<StructuredError>(&body) {
            Ok(error) => {
                tracing::warn!(
                    status,
                    error_id = error.error_id,
                    "request failed with structured error"
                );
                Err(ApiError::Api { status, error })
            }
            Err(_) => {
                tracing::warn!(status, "request failed without a structured error body");
                Err(ApiError::Status { status })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> Transport {
        let config = ClientConfig {
            base_url: base_url.to_owned(),
            ..ClientConfig::default()
        };
        Transport::from_config(&config).expect("transport should build")
    }

    #[test]
    fn endpoint_joins_relative_paths_to_the_base() {
        let transport = transport("http://localhost:8080/api/v1");
        let url = transport.endpoint("profile").expect("valid endpoint");
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/profile");
    }

    #[test]
    fn trailing_slash_on_the_base_is_normalized() {
        let bare = transport("http://localhost:8080/api/v1");
        let slashed = transport("http://localhost:8080/api/v1/");
        assert_eq!(
            bare.endpoint("reference-letters").expect("valid endpoint"),
            slashed.endpoint("reference-letters").expect("valid endpoint"),
        );
    }

    #[test]
    fn invalid_base_url_is_rejected_at_construction() {
        let config = ClientConfig {
            base_url: "not a url".to_owned(),
            ..ClientConfig::default()
        };
        let result = Transport::from_config(&config).map(|_| ());
        assert!(
            matches!(result, Err(ApiError::InvalidUrl { .. })),
            "expected InvalidUrl, got: {result:?}"
        );
    }
}
