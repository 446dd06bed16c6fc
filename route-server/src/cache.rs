//! Caching layer for search results.
//!
//! The timetable is read-only while the server runs, so a search for the
//! same station pair always produces the same result. Successful results
//! are cached per request; failures are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::planner::{SearchRequest, SearchResult};

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache of search results keyed by (source, destination).
pub struct SearchCache {
    results: MokaCache<SearchRequest, Arc<SearchResult>>,
}

impl SearchCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let results = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { results }
    }

    /// Get a cached result.
    pub async fn get(&self, request: &SearchRequest) -> Option<Arc<SearchResult>> {
        self.results.get(request).await
    }

    /// Insert a result into the cache.
    pub async fn insert(&self, request: SearchRequest, result: Arc<SearchResult>) {
        self.results.insert(request, result).await;
    }
}
