//! Tracked-clock endpoints: render pass, add, remove.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zonewall_core::error::{CLOCK_LIMIT, DomainError};
use zonewall_registry::application::{ClockView, handle_add_clock, handle_remove_clock, render_pass};
use zonewall_registry::domain::AddOutcome;

use crate::error::ApiError;
use crate::state::AppState;

/// One render pass over the tracked set.
#[derive(Debug, Serialize)]
pub struct ClocksResponse {
    /// True while a simulated instant is pinned; clients stop their
    /// tick loop until reset.
    pub simulated: bool,
    /// The instant the pass was computed for.
    pub instant: DateTime<Utc>,
    /// Tracked clocks, ascending by offset.
    pub clocks: Vec<ClockView>,
}

/// Request body for adding a clock.
#[derive(Debug, Deserialize)]
pub struct AddClockRequest {
    /// Canonical zone identifier from the catalog.
    pub timezone: String,
}

/// Response body for an add attempt.
#[derive(Debug, Serialize)]
pub struct AddClockResponse {
    /// `added` or `already-tracked`.
    pub outcome: &'static str,
}

/// GET /api/v1/clocks
async fn list_clocks(State(state): State<AppState>) -> Result<Json<ClocksResponse>, ApiError> {
    // One instant per pass; every per-clock computation threads it.
    let simulation = state.simulation.read().await;
    let instant = simulation.current(state.clock.as_ref());
    let simulated = simulation.is_simulated();
    drop(simulation);

    let clocks = render_pass(
        state.store.as_ref(),
        state.resolver.as_ref(),
        instant,
        &state.local_zone,
    )
    .await?;

    Ok(Json(ClocksResponse {
        simulated,
        instant,
        clocks,
    }))
}

/// POST /api/v1/clocks
async fn add_clock(
    State(state): State<AppState>,
    Json(request): Json<AddClockRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let instant = state
        .simulation
        .read()
        .await
        .current(state.clock.as_ref());

    let outcome = handle_add_clock(
        state.store.as_ref(),
        state.resolver.as_ref(),
        instant,
        &state.local_zone,
        &request.timezone,
    )
    .await?;

    match outcome {
        AddOutcome::Added => Ok((
            StatusCode::CREATED,
            Json(AddClockResponse { outcome: "added" }),
        )),
        // Duplicates are not an error shown to the user; membership is
        // already what they asked for.
        AddOutcome::AlreadyTracked => Ok((
            StatusCode::OK,
            Json(AddClockResponse {
                outcome: "already-tracked",
            }),
        )),
        AddOutcome::LimitReached => {
            Err(ApiError(DomainError::ClockLimitReached { limit: CLOCK_LIMIT }))
        }
    }
}

/// DELETE /api/v1/clocks/{index}
async fn remove_clock(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, ApiError> {
    let instant = state
        .simulation
        .read()
        .await
        .current(state.clock.as_ref());

    handle_remove_clock(
        state.store.as_ref(),
        state.resolver.as_ref(),
        instant,
        &state.local_zone,
        index,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the tracked-clock endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clocks).post(add_clock))
        .route("/{index}", delete(remove_clock))
}
