//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::Station;
use crate::planner::{RoutePlanner, SearchError, SearchRequest, SearchResult};
use crate::timetable::{StoreError, TimetableStore};

use super::dto::*;
use super::state::AppState;

/// Message for any rejected search request.
const INVALID_SEARCH: &str = "Please provide a valid source and destination.";

/// Message for any failed search.
const SEARCH_FAILED: &str = "A server error occurred during the search.";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/trains/search", get(search_trains))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Banner for the bare root path.
async fn index() -> &'static str {
    "Train Search API is running..."
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stations, sorted by name.
async fn list_stations(State(state): State<AppState>) -> Result<Json<Vec<Station>>, AppError> {
    let stations = state.store.stations().map_err(|e| {
        error!(error = %e, "Failed to fetch stations");
        AppError::Internal {
            message: "Error on the server.".to_string(),
        }
    })?;

    Ok(Json(stations))
}

/// Direct and one-change routes between two stations.
async fn search_trains(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        warn!(error = %rejection, "Malformed search query");
        AppError::BadRequest {
            message: INVALID_SEARCH.to_string(),
        }
    })?;
    let request = SearchRequest::new(
        query.source.unwrap_or_default(),
        query.destination.unwrap_or_default(),
    );
    request.validate()?;

    if let Some(cached) = state.cache.get(&request).await {
        debug!(
            source = %request.source,
            destination = %request.destination,
            "Search cache hit"
        );
        return Ok(Json(SearchResponse::from_result(&cached)));
    }

    let result = Arc::new(run_search(&state, request.clone()).await?);
    state.cache.insert(request, result.clone()).await;

    Ok(Json(SearchResponse::from_result(&result)))
}

/// Run a search on the blocking pool under the configured deadline.
async fn run_search(state: &AppState, request: SearchRequest) -> Result<SearchResult, AppError> {
    let store = state.store.clone();
    let config = state.config.clone();
    let source = request.source.clone();
    let destination = request.destination.clone();

    let task = tokio::task::spawn_blocking(move || {
        RoutePlanner::new(store.as_ref(), config.as_ref()).search(&request)
    });

    match tokio::time::timeout(state.search_timeout, task).await {
        Ok(Ok(result)) => Ok(result?),
        Ok(Err(join_error)) => {
            error!(%source, %destination, error = %join_error, "Search task failed");
            Err(AppError::search_failed())
        }
        Err(_) => {
            error!(
                %source,
                %destination,
                timeout_secs = state.search_timeout.as_secs_f64(),
                "Search timed out"
            );
            Err(AppError::search_failed())
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl AppError {
    fn search_failed() -> Self {
        AppError::Internal {
            message: SEARCH_FAILED.to_string(),
        }
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidRequest(reason) => {
                warn!(%reason, "Rejected search request");
                AppError::BadRequest {
                    message: INVALID_SEARCH.to_string(),
                }
            }
            SearchError::Store(e) => AppError::from(e),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        error!(error = %err, "Timetable query failed");
        AppError::search_failed()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message } | AppError::Internal { message } => message,
        };

        let body = Json(ErrorResponse { message });
        (status, body).into_response()
    }
}
