//! Errors raised by the remote breed API client.

use thiserror::Error;

/// Errors that can occur while talking to the breed API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured base URL cannot be joined with a request path
    #[error("Invalid API URL '{url}'")]
    InvalidUrl { url: String },

    /// Transport-level failure (DNS, connect, timeout, TLS)
    #[error("Request to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The requested resource does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The response body did not match the expected shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was valid JSON but not the expected record
    #[error("Unexpected payload from '{url}': {source}")]
    InvalidPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short machine-friendly tag, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Status { .. } => "status_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidPayload { .. } => "invalid_payload",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
