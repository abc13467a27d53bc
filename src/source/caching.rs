//! Cache-backed source decorator
//!
//! `CachingSource` serves repeated queries from the persistent cache and only
//! contacts the upstream source on a miss. Cache failures are logged and
//! treated as misses so they never fail a lookup.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{SourceError, WordSource};
use crate::cache::{Cache, CacheError};

/// Cache key for a search query
pub fn search_key(term: &str) -> String {
    format!("search:{}", term)
}

/// Cache key for a word details query
pub fn details_key(word_id: i64) -> String {
    format!("details:{}", word_id)
}

/// Cache key for a paradigm query
pub fn paradigm_key(word_id: i64) -> String {
    format!("paradigm:{}", word_id)
}

/// Wraps a `WordSource` with the persistent cache
///
/// Without a cache every call goes straight to the upstream source. With
/// `refresh` set, cached values are never read but fresh results are still
/// written back.
#[derive(Debug)]
pub struct CachingSource<S> {
    upstream: S,
    cache: Option<Cache>,
    refresh: bool,
}

impl<S: WordSource> CachingSource<S> {
    pub fn new(upstream: S, cache: Option<Cache>, refresh: bool) -> Self {
        Self {
            upstream,
            cache,
            refresh,
        }
    }

    /// The wrapped cache, if any
    pub fn cache(&self) -> Option<&Cache> {
        self.cache.as_ref()
    }

    #[cfg(test)]
    fn upstream(&self) -> &S {
        &self.upstream
    }

    /// Releases the cache connection
    pub fn close(self) -> Result<(), CacheError> {
        match self.cache {
            Some(cache) => cache.close(),
            None => Ok(()),
        }
    }

    /// Returns the cached payload for `key`, if it may be served from cache
    fn lookup(&self, key: &str) -> Option<Vec<u8>> {
        if self.refresh {
            return None;
        }
        let cache = self.cache.as_ref()?;

        match cache.get(key) {
            Ok(Some(entry)) => {
                debug!(key, cached_at = %entry.created_at, "Cache hit");
                Some(entry.value)
            }
            Ok(None) => {
                debug!(key, "Cache miss");
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Cache read failed, fetching from source");
                None
            }
        }
    }

    /// Writes a fresh payload back to the cache; failures are only logged
    fn store(&self, key: &str, data: &[u8]) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };

        if let Err(e) = cache.set(key, data) {
            warn!(key, error = %e, "Cache write failed");
        }
    }
}

#[async_trait]
impl<S: WordSource> WordSource for CachingSource<S> {
    async fn search(&self, term: &str) -> Result<Vec<u8>, SourceError> {
        let key = search_key(term);
        if let Some(cached) = self.lookup(&key) {
            return Ok(cached);
        }

        let data = self.upstream.search(term).await?;
        self.store(&key, &data);
        Ok(data)
    }

    async fn details(&self, word_id: i64) -> Result<Vec<u8>, SourceError> {
        let key = details_key(word_id);
        if let Some(cached) = self.lookup(&key) {
            return Ok(cached);
        }

        let data = self.upstream.details(word_id).await?;
        self.store(&key, &data);
        Ok(data)
    }

    async fn paradigm(&self, word_id: i64) -> Result<Vec<u8>, SourceError> {
        let key = paradigm_key(word_id);
        if let Some(cached) = self.lookup(&key) {
            return Ok(cached);
        }

        let data = self.upstream.paradigm(word_id).await?;
        self.store(&key, &data);
        Ok(data)
    }
}
