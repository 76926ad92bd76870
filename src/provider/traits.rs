//! Provider trait and error types

use super::types::{SearchRequest, SearchResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a provider call.
///
/// Only these errors are reported back to the host as a JSON error payload;
/// anything else raised during a search propagates to the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to search provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse search provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProviderError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

/// A search backend able to run a search-and-contents request
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &str;

    /// Run one search and return the results with their contents
    async fn search_and_contents(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, ProviderError>;
}
