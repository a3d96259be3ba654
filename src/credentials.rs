use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// API credentials, read once at startup and immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub name: String,
}

/// Startup-only configuration failures. These never travel through the
/// per-request error channel; the binary exits on them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read credentials file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse credentials file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("credentials produce an invalid '{header}' header value")]
    Header {
        header: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("invalid API base URL '{url}'")]
    BaseUrl { url: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl Credentials {
    /// Load credentials from a JSON file of the shape
    /// `{ "token": "...", "name": "..." }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
