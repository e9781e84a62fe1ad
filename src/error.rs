//! Error types for the search core
//!
//! Only the image-probe layer recovers locally (see
//! [`validate`](crate::validate)); everything else propagates one of these
//! variants to the caller.

use thiserror::Error;

/// Errors surfaced by [`SearchProvider`](crate::provider::SearchProvider)
#[derive(Debug, Error)]
pub enum SearchError {
    /// The primary search request failed at the transport level
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A request URL produced by a backend did not parse
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body could not be decoded as JSON
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A backend's parser rejected the decoded response
    #[error("backend '{backend}' failed to process response: {message}")]
    Backend { backend: String, message: String },
}

impl SearchError {
    /// Construct a backend parse failure
    pub fn backend(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            backend: backend.into(),
            message: message.into(),
        }
    }
}
