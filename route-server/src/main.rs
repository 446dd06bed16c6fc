use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_server::config::ServerConfig;
use route_server::timetable::InMemoryTimetable;
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Fail fast if the timetable is unreadable
    let timetable = match InMemoryTimetable::load(&config.timetable_path) {
        Ok(timetable) => timetable,
        Err(e) => {
            error!(error = %e, "Failed to load timetable");
            return ExitCode::FAILURE;
        }
    };

    info!(
        rate_per_km = config.search.rate_per_km,
        min_layover = config.search.min_layover_mins,
        max_layover = config.search.max_layover_mins,
        max_connections = config.search.max_connections,
        rollover = %config.search.rollover,
        "Search configuration"
    );

    let state = AppState::new(
        timetable,
        config.search,
        &config.cache,
        config.search_timeout,
    );
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!("Train route search listening on http://{addr}");
    info!("  GET /api/stations       - All stations");
    info!("  GET /api/trains/search  - Routes (?source=..&destination=..)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
