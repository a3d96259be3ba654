use reqwest::StatusCode;
use thiserror::Error;

/// Per-request failures surfaced through the completion callback.
///
/// Startup configuration problems are deliberately not part of this enum;
/// see [`crate::credentials::ConfigError`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-layer failure reported by the HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with 200.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The 200 body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
