//! Ekilex API client
//!
//! Fetches raw JSON payloads from the Ekilex dictionary API. The client does
//! not parse responses; that is left to the projector.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::{SourceError, WordSource};

/// Base URL for the Ekilex API
const EKILEX_BASE_URL: &str = "https://ekilex.ee/api";

/// Header carrying the API key
const API_KEY_HEADER: &str = "ekilex-api-key";

/// Client for fetching word data from the Ekilex API
#[derive(Debug, Clone)]
pub struct EkilexClient {
    /// HTTP client for making requests
    http_client: Client,
    api_key: String,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl EkilexClient {
    /// Creates a new EkilexClient using the public API endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, EKILEX_BASE_URL)
    }

    /// Creates a new EkilexClient against a custom base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Builds an endpoint URL, percent-encoding each path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| SourceError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<Vec<u8>, SourceError> {
        debug!(%url, "Requesting");
        let response = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SourceError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl WordSource for EkilexClient {
    async fn search(&self, term: &str) -> Result<Vec<u8>, SourceError> {
        let url = self.endpoint(&["word", "search", term])?;
        self.get(url).await
    }

    async fn details(&self, word_id: i64) -> Result<Vec<u8>, SourceError> {
        let id = word_id.to_string();
        let url = self.endpoint(&["word", "details", id.as_str()])?;
        self.get(url).await
    }

    async fn paradigm(&self, word_id: i64) -> Result<Vec<u8>, SourceError> {
        let id = word_id.to_string();
        let url = self.endpoint(&["paradigm", "details", id.as_str()])?;
        self.get(url).await
    }
}
