//! Error types

use thiserror::Error;

/// Failures talking to the webhook API
///
/// A non-2xx status is not an error here; it comes back as an
/// `ApiResponse` and the caller decides what counts as accepted.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no base URL provided")]
    MissingBaseUrl,
}
