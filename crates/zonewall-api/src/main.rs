//! Zonewall API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use zonewall_core::clock::SystemClock;
use zonewall_offset::TzdbResolver;
use zonewall_api::{routes, state};
use zonewall_store::JsonFileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Zonewall API server");

    // Read configuration from environment.
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;
    let state_path =
        std::env::var("ZONEWALL_STATE_PATH").unwrap_or_else(|_| "zonewall-state.json".to_string());

    // Detect the host's local zone; degrade to UTC when unknown.
    let local_zone = match iana_time_zone::get_timezone() {
        Ok(zone) => zone,
        Err(error) => {
            tracing::warn!(%error, "could not detect host timezone, using UTC");
            "UTC".to_string()
        }
    };
    tracing::info!(%local_zone, %state_path, "resolved host configuration");

    // Build application state.
    let app_state = state::AppState::new(
        Arc::new(JsonFileStore::new(state_path)),
        Arc::new(TzdbResolver::new()),
        Arc::new(SystemClock),
        local_zone,
    );

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/clocks", routes::clocks::router())
        .nest("/api/v1/simulation", routes::simulation::router())
        .nest("/api/v1/snippets", routes::snippets::router())
        .nest("/api/v1/catalog", routes::catalog::router())
        .nest("/api/v1/preferences", routes::preferences::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
