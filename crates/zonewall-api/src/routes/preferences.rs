//! Display-preference endpoints (`theme`, `displayMode`).
//!
//! Outside the core time logic; a thin passthrough to the state store
//! keyed the way the original storage contract was.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use zonewall_core::error::DomainError;
use zonewall_core::store::{DISPLAY_MODE_KEY, THEME_KEY, StateStore as _};

use crate::error::ApiError;
use crate::state::AppState;

const THEMES: &[&str] = &["light", "dark"];
const DISPLAY_MODES: &[&str] = &["analog", "digital"];

/// Current display preferences.
#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    /// `light` or `dark`.
    pub theme: String,
    /// `analog` or `digital`.
    pub display_mode: String,
}

/// Partial preference update.
#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    /// New theme, when present.
    pub theme: Option<String>,
    /// New display mode, when present.
    pub display_mode: Option<String>,
}

async fn read_string(
    state: &AppState,
    key: &str,
    default: &str,
) -> Result<String, DomainError> {
    Ok(state
        .store
        .get(key)
        .await?
        .and_then(|value| value.as_str().map(ToOwned::to_owned))
        .unwrap_or_else(|| default.to_owned()))
}

/// GET /api/v1/preferences
async fn get_preferences(
    State(state): State<AppState>,
) -> Result<Json<PreferencesResponse>, ApiError> {
    Ok(Json(PreferencesResponse {
        theme: read_string(&state, THEME_KEY, "light").await?,
        display_mode: read_string(&state, DISPLAY_MODE_KEY, "analog").await?,
    }))
}

/// PUT /api/v1/preferences
async fn update_preferences(
    State(state): State<AppState>,
    Json(request): Json<UpdatePreferencesRequest>,
) -> Result<StatusCode, ApiError> {
    if let Some(theme) = request.theme {
        if !THEMES.contains(&theme.as_str()) {
            return Err(ApiError(DomainError::Validation(format!(
                "unknown theme: {theme}"
            ))));
        }
        state
            .store
            .set(THEME_KEY, serde_json::Value::String(theme))
            .await?;
    }
    if let Some(display_mode) = request.display_mode {
        if !DISPLAY_MODES.contains(&display_mode.as_str()) {
            return Err(ApiError(DomainError::Validation(format!(
                "unknown display mode: {display_mode}"
            ))));
        }
        state
            .store
            .set(DISPLAY_MODE_KEY, serde_json::Value::String(display_mode))
            .await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the preference endpoints.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_preferences).put(update_preferences))
}
