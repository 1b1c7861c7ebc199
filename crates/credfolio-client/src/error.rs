use credfolio_core::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::messages::ERROR_ID_PROFILE_NOT_FOUND;

/// The backend's structured error body: `{"error_id": 1201, "message": "..."}`.
///
/// `error_id` is the stable classification key; `message` is backend prose and
/// only used as a fallback when the id is not in the static table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredError {
    pub error_id: i64,
    pub message: String,
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_id, self.message)
    }
}

/// Errors produced by the credfolio API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered non-2xx with a parseable structured error body.
    #[error("API error {error} (HTTP {status})")]
    Api { status: u16, error: StructuredError },

    /// The backend answered non-2xx without a parseable structured error body.
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// A 2xx response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// No profile exists yet for this user. Distinct from other failures
    /// because the product renders it as a display state, not an error.
    #[error("Profile not found")]
    ProfileNotFound,

    /// Client-side validation rejected the input before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configured base URL or a derived endpoint URL is not valid.
    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    /// True when the error means "no profile exists yet", whether the backend
    /// said so with a bare 404 or with structured error id 1201.
    #[must_use]
    pub fn is_profile_missing(&self) -> bool {
        match self {
            ApiError::ProfileNotFound => true,
            ApiError::Api { error, .. } => error.error_id == ERROR_ID_PROFILE_NOT_FOUND,
            _ => false,
        }
    }
}
