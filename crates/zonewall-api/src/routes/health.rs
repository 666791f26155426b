//! Health check endpoint.
//!
//! Reports service liveness plus the two things an operator of this
//! service actually cares about: whether the state store answers, and
//! whether the instance is serving simulated time.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use zonewall_core::store::{CLOCKS_KEY, StateStore as _};

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the state store is unreachable.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// `reachable` or `unreachable`.
    pub state_store: &'static str,
    /// True while a simulated instant is pinned.
    pub simulated: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let state_store = match state.store.get(CLOCKS_KEY).await {
        Ok(_) => "reachable",
        Err(error) => {
            tracing::warn!(%error, "health probe could not read state store");
            "unreachable"
        }
    };
    let simulated = state.simulation.read().await.is_simulated();

    Json(HealthResponse {
        status: if state_store == "reachable" {
            "ok"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        state_store,
        simulated,
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
