//! Simulated-instant endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::put;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for pinning a simulated instant.
#[derive(Debug, Deserialize)]
pub struct SetSimulationRequest {
    /// Free-text wall-clock reading, interpreted in the
    /// fixed-reference zone (UTC−6).
    pub input: String,
}

/// Response body after pinning.
#[derive(Debug, Serialize)]
pub struct SetSimulationResponse {
    /// The pinned absolute instant.
    pub simulated_instant: DateTime<Utc>,
}

/// PUT /api/v1/simulation
async fn set_simulation(
    State(state): State<AppState>,
    Json(request): Json<SetSimulationRequest>,
) -> Result<Json<SetSimulationResponse>, ApiError> {
    let mut simulation = state.simulation.write().await;
    let simulated_instant = simulation.set_from_text(&request.input)?;
    Ok(Json(SetSimulationResponse { simulated_instant }))
}

/// DELETE /api/v1/simulation
async fn reset_simulation(State(state): State<AppState>) -> StatusCode {
    state.simulation.write().await.clear();
    StatusCode::NO_CONTENT
}

/// Returns the router for the simulation endpoints.
pub fn router() -> Router<AppState> {
    Router::new().route("/", put(set_simulation).delete(reset_simulation))
}
