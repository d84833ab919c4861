//! Outbound HTTP seam for the generation API.
//!
//! The processor only depends on [`GenerationTransport`], so tests can swap in
//! the recording [`mock::MockTransport`] in place of [`HttpTransport`].

pub mod http;
pub mod mock;

use crate::services::gemini::GenerateContentRequest;
use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpTransport;

/// The call to the generation API did not produce a response body.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Generation API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport failure: {0}")]
    Other(String),
}

#[async_trait]
pub trait GenerationTransport: Send + Sync {
    /// POST `request` as JSON to `url` and return the raw response body.
    async fn send(&self, url: &str, request: &GenerateContentRequest)
        -> Result<String, TransportError>;
}
