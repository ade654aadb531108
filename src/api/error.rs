//! Error types for the generation round-trip and image loading.
//!
//! Every [`SubmitError`] collapses into one user-facing string via
//! [`SubmitError::user_message`], preferring the server's `detail` field.

use thiserror::Error;

/// Errors that can occur while submitting a generation request.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The service could not be reached or the connection dropped.
    #[error("Connection to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The opt-in request timeout elapsed.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// The service answered with a non-success status.
    #[error("Generation failed with HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// A success response did not have the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SubmitError {
    /// Single error line shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            SubmitError::Status { status, .. } => format!("API request failed (HTTP {})", status),
            SubmitError::Transport { .. } => "Could not reach the comic service".to_string(),
            SubmitError::Timeout { duration } => format!("Request timeout after {}s", duration),
            SubmitError::Malformed(_) => "Unexpected response from the comic service".to_string(),
        }
    }

    /// Short classification used in log lines.
    pub fn error_type(&self) -> &'static str {
        match self {
            SubmitError::Transport { .. } => "transport",
            SubmitError::Timeout { .. } => "timeout",
            SubmitError::Status { .. } => "status",
            SubmitError::Malformed(_) => "malformed",
        }
    }
}

/// Errors that can occur while fetching a panel image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image request to '{url}' failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Image request to '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Image at '{url}' could not be decoded: {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },
}
