//! Web layer for the route search engine.
//!
//! Provides HTTP endpoints for listing stations and searching routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
