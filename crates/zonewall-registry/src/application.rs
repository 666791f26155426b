//! Application-level handlers: load → mutate → resort → persist.
//!
//! The domain set is synchronous; these handlers orchestrate it against
//! the state store. Every mutation and every render-pass resort ends by
//! persisting, so the stored list always reflects display order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use zonewall_catalog::display_label;
use zonewall_core::error::DomainError;
use zonewall_core::store::{CLOCKS_KEY, StateStore};
use zonewall_offset::{OffsetResolver, OffsetSnapshot};

use crate::domain::{AddOutcome, ClockSet, PersistedClock};

/// Render data for one tracked clock.
#[derive(Debug, Clone, Serialize)]
pub struct ClockView {
    /// Canonical zone identifier.
    pub timezone_id: String,
    /// Display label from the catalog (or prettified identifier).
    pub label: String,
    /// Whether this is the host's local clock.
    pub is_local: bool,
    /// Whether this is the fixed-reference (UTC−6) clock.
    pub is_fixed_reference: bool,
    /// Offset metadata at the pass's instant.
    #[serde(flatten)]
    pub snapshot: OffsetSnapshot,
}

/// Loads the tracked set from the store, applying the load-time
/// invariants (dedup, local injection, default pair).
///
/// Corrupt persisted state is treated like absent state and logged,
/// never surfaced.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` when the store read fails.
pub async fn load_clock_set(
    store: &dyn StateStore,
    local_zone: &str,
) -> Result<ClockSet, DomainError> {
    let persisted = match store.get(CLOCKS_KEY).await? {
        Some(value) => match serde_json::from_value::<Vec<PersistedClock>>(value) {
            Ok(list) => Some(list),
            Err(error) => {
                tracing::warn!(%error, "corrupt clock state, falling back to defaults");
                None
            }
        },
        None => None,
    };
    Ok(ClockSet::from_persisted(persisted, local_zone))
}

/// Persists the tracked set under the `clocks` key.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` when serialization or the
/// store write fails.
pub async fn persist_clock_set(store: &dyn StateStore, set: &ClockSet) -> Result<(), DomainError> {
    let value = serde_json::to_value(set.to_persisted())
        .map_err(|e| DomainError::Infrastructure(format!("clock serialization failed: {e}")))?;
    store.set(CLOCKS_KEY, value).await
}

/// Adds a catalog zone to the tracked set.
///
/// # Errors
///
/// Returns `DomainError::UnknownTimezone` for identifiers outside the
/// catalog and `DomainError::Infrastructure` on persistence failure.
pub async fn handle_add_clock(
    store: &dyn StateStore,
    resolver: &dyn OffsetResolver,
    instant: DateTime<Utc>,
    local_zone: &str,
    timezone_id: &str,
) -> Result<AddOutcome, DomainError> {
    if !zonewall_catalog::is_known(timezone_id) {
        return Err(DomainError::UnknownTimezone(timezone_id.to_owned()));
    }

    let mut set = load_clock_set(store, local_zone).await?;
    let outcome = set.add(timezone_id);
    if outcome == AddOutcome::Added {
        set.resort(resolver, instant);
        persist_clock_set(store, &set).await?;
        tracing::info!(timezone_id, count = set.len(), "clock added");
    }
    Ok(outcome)
}

/// Removes the clock at `index` from the tracked set.
///
/// # Errors
///
/// Propagates the domain guards (`InvalidIndex`,
/// `LocalClockImmutable`) and persistence failures.
pub async fn handle_remove_clock(
    store: &dyn StateStore,
    resolver: &dyn OffsetResolver,
    instant: DateTime<Utc>,
    local_zone: &str,
    index: usize,
) -> Result<(), DomainError> {
    let mut set = load_clock_set(store, local_zone).await?;
    // Indexes refer to display order, so sort before resolving one.
    set.resort(resolver, instant);
    let removed = set.remove(index)?;
    persist_clock_set(store, &set).await?;
    tracing::info!(timezone_id = removed.timezone_id, "clock removed");
    Ok(())
}

/// One render pass: resorts the tracked set by current offset,
/// persists the order, and resolves a snapshot per clock. `instant`
/// must be obtained once from the simulation engine and threaded
/// through the whole pass.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` on persistence failure.
pub async fn render_pass(
    store: &dyn StateStore,
    resolver: &dyn OffsetResolver,
    instant: DateTime<Utc>,
    local_zone: &str,
) -> Result<Vec<ClockView>, DomainError> {
    let mut set = load_clock_set(store, local_zone).await?;
    set.resort(resolver, instant);
    persist_clock_set(store, &set).await?;

    Ok(set
        .clocks()
        .iter()
        .map(|clock| ClockView {
            timezone_id: clock.timezone_id.clone(),
            label: display_label(&clock.timezone_id),
            is_local: clock.is_local,
            is_fixed_reference: clock.is_fixed_reference(),
            snapshot: resolver.resolve(&clock.timezone_id, instant),
        })
        .collect())
}
