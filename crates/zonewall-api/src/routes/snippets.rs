//! Snippet-generation endpoint.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use zonewall_core::error::DomainError;
use zonewall_snippets::GeneratedSnippetSet;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for snippet generation. The zone identifier contains
/// slashes, so it travels as a query parameter.
#[derive(Debug, Deserialize)]
pub struct SnippetsQuery {
    /// Canonical zone identifier from the catalog.
    pub timezone: String,
}

/// GET /api/v1/snippets?timezone=...
async fn get_snippets(
    State(state): State<AppState>,
    Query(query): Query<SnippetsQuery>,
) -> Result<Json<GeneratedSnippetSet>, ApiError> {
    if !zonewall_catalog::is_known(&query.timezone) {
        return Err(ApiError(DomainError::UnknownTimezone(query.timezone)));
    }

    let instant = state
        .simulation
        .read()
        .await
        .current(state.clock.as_ref());

    let set = zonewall_snippets::generate(
        state.resolver.as_ref(),
        &state.local_zone,
        instant,
        &query.timezone,
    )?;
    Ok(Json(set))
}

/// Returns the router for the snippet endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_snippets))
}
