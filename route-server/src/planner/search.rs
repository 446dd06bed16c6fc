//! Search coordinator.
//!
//! Validates a request, runs the direct and connecting finders for the
//! same station pair, and assembles the combined result.

use tracing::info;

use crate::timetable::{StoreError, TimetableStore};

use super::config::SearchConfig;
use super::connecting::{Connection, find_connections};
use super::direct::{DirectRoute, find_direct_routes};
use super::fare::FareCalculator;

/// Message returned alongside a non-empty result.
pub const ROUTES_FOUND: &str = "Routes found.";

/// Error from route search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Missing or identical station names; the store was not queried
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// The timetable could not be queried
    #[error("timetable query failed: {0}")]
    Store(#[from] StoreError),
}

/// Request for route search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchRequest {
    /// Station the journey starts from.
    pub source: String,

    /// Station the journey ends at.
    pub destination: String,
}

impl SearchRequest {
    /// Create a new search request. Names are kept exactly as given.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Validate the search request.
    ///
    /// Only empty or identical names are rejected. A name that matches no
    /// station is a valid request with an empty result.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.source.is_empty() {
            return Err(SearchError::InvalidRequest(
                "source station is required".to_string(),
            ));
        }
        if self.destination.is_empty() {
            return Err(SearchError::InvalidRequest(
                "destination station is required".to_string(),
            ));
        }
        if self.source == self.destination {
            return Err(SearchError::InvalidRequest(
                "source and destination must differ".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Single-train journeys, in store order.
    pub direct: Vec<DirectRoute>,

    /// One-change journeys, in traversal order.
    pub connections: Vec<Connection>,

    /// Human-readable summary.
    pub message: String,
}

impl SearchResult {
    /// Assemble a result, choosing the message from what was found.
    pub fn new(
        request: &SearchRequest,
        direct: Vec<DirectRoute>,
        connections: Vec<Connection>,
    ) -> Self {
        let message = if direct.is_empty() && connections.is_empty() {
            format!(
                "No routes found from {} to {}.",
                request.source, request.destination
            )
        } else {
            ROUTES_FOUND.to_string()
        };

        Self {
            direct,
            connections,
            message,
        }
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.connections.is_empty()
    }
}

/// Route planner over a timetable store.
pub struct RoutePlanner<'a, S: TimetableStore + ?Sized> {
    store: &'a S,
    config: &'a SearchConfig,
}

impl<'a, S: TimetableStore + ?Sized> RoutePlanner<'a, S> {
    /// Create a new planner.
    pub fn new(store: &'a S, config: &'a SearchConfig) -> Self {
        Self { store, config }
    }

    /// Search for direct and one-change routes.
    ///
    /// Either both lists are returned or the whole search fails.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;

        let source = request.source.as_str();
        let destination = request.destination.as_str();
        let fares = FareCalculator::new(self.config.rate_per_km);

        let direct = find_direct_routes(self.store, &fares, source, destination)?;
        let connections = find_connections(self.store, self.config, source, destination)?;

        info!(
            source,
            destination,
            direct = direct.len(),
            connections = connections.len(),
            "Route search complete"
        );

        Ok(SearchResult::new(request, direct, connections))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
