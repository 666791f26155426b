//! Catalog picker endpoint.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use zonewall_catalog::CATALOG;
use zonewall_offset::OffsetResolver as _;

use crate::state::AppState;

/// Optional picker filter.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive search over label, identifier and aliases.
    #[serde(default)]
    pub filter: String,
}

/// One picker entry.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    /// Canonical zone identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    /// The external scripting system's name for the zone.
    pub alternate_name: String,
    /// Current `GMT±HH:MM` label.
    pub offset_label: String,
    /// Current offset in minutes.
    pub offset_minutes: i32,
}

/// GET /api/v1/catalog?filter=...
///
/// Entries are sorted ascending by the offset they observe at the
/// engine's current instant, mirroring the tracked-set ordering.
async fn list_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<CatalogEntry>> {
    let instant = state
        .simulation
        .read()
        .await
        .current(state.clock.as_ref());

    let mut entries: Vec<CatalogEntry> = CATALOG
        .iter()
        .filter(|descriptor| descriptor.matches_filter(&query.filter))
        .map(|descriptor| {
            let snapshot = state.resolver.resolve(descriptor.id, instant);
            CatalogEntry {
                id: descriptor.id.to_owned(),
                label: descriptor.label.to_owned(),
                alternate_name: descriptor.alternate_name.to_owned(),
                offset_label: snapshot.offset_label,
                offset_minutes: snapshot.offset_minutes,
            }
        })
        .collect();
    entries.sort_by_key(|entry| entry.offset_minutes);

    Json(entries)
}

/// Returns the router for the catalog endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_catalog))
}
