//! Word data sources
//!
//! A `WordSource` answers the three queries a lookup needs and returns raw
//! JSON payloads. `EkilexClient` talks to the Ekilex API; `CachingSource`
//! wraps any source with the persistent cache.

mod caching;
mod ekilex;

pub use caching::{details_key, paradigm_key, search_key, CachingSource};
pub use ekilex::EkilexClient;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when fetching from a source
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error: {0}")]
    Status(StatusCode),

    /// The request URL could not be built
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

/// Anything able to answer word searches, details and paradigm queries
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Search for candidate words matching `term`
    async fn search(&self, term: &str) -> Result<Vec<u8>, SourceError>;

    /// Fetch the details (class, lexemes, synonyms) of a word
    async fn details(&self, word_id: i64) -> Result<Vec<u8>, SourceError>;

    /// Fetch every inflection paradigm of a word
    async fn paradigm(&self, word_id: i64) -> Result<Vec<u8>, SourceError>;
}
