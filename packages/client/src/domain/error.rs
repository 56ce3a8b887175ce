//! Error types for a single request/response exchange.

use thiserror::Error;

/// Text used when a failed `/process_url` response carries no usable `detail`
pub const PROCESS_URL_FALLBACK_DETAIL: &str = "Failed to process URL";

/// Failure of one exchange with the backend.
///
/// The `Display` output is the human-readable text shown in the transcript,
/// so every variant renders its payload as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// Non-success status with a structured `detail` (process_url only)
    #[error("{0}")]
    Request(String),

    /// The request could not be sent or the response could not be read
    #[error("{0}")]
    Transport(String),

    /// The response body is not the expected JSON
    #[error("{0}")]
    Decode(String),
}

impl ChatError {
    /// Build a `Request` error from an optional `detail`, falling back to
    /// [`PROCESS_URL_FALLBACK_DETAIL`] when it is missing or empty.
    pub fn request(detail: Option<String>) -> Self {
        match detail {
            Some(detail) if !detail.is_empty() => Self::Request(detail),
            _ => Self::Request(PROCESS_URL_FALLBACK_DETAIL.to_string()),
        }
    }
}
