//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheConfig, SearchCache};
use crate::planner::SearchConfig;
use crate::timetable::TimetableStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Read-only timetable
    pub store: Arc<dyn TimetableStore + Send + Sync>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,

    /// Search results by station pair
    pub cache: Arc<SearchCache>,

    /// Deadline for a single search
    pub search_timeout: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        store: impl TimetableStore + Send + Sync + 'static,
        config: SearchConfig,
        cache_config: &CacheConfig,
        search_timeout: Duration,
    ) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            cache: Arc::new(SearchCache::new(cache_config)),
            search_timeout,
        }
    }
}
