//! Shared application state.

use std::sync::Arc;

use tokio::sync::RwLock;
use zonewall_core::clock::Clock;
use zonewall_core::store::StateStore;
use zonewall_offset::OffsetResolver;
use zonewall_simulation::SimulationEngine;

/// Application state shared across all request handlers.
///
/// The simulation engine is the only piece behind a lock; the clock
/// set lives in the store and is re-read per request.
#[derive(Clone)]
pub struct AppState {
    /// Key/value persistence collaborator.
    pub store: Arc<dyn StateStore>,
    /// Offset resolver.
    pub resolver: Arc<dyn OffsetResolver>,
    /// Real wall clock; only the simulation engine consults it.
    pub clock: Arc<dyn Clock>,
    /// The simulated-instant slot.
    pub simulation: Arc<RwLock<SimulationEngine>>,
    /// The host's local zone identifier.
    pub local_zone: String,
}

impl AppState {
    /// Create new application state with an empty simulation slot.
    #[must_use]
    pub fn new(
        store: Arc<dyn StateStore>,
        resolver: Arc<dyn OffsetResolver>,
        clock: Arc<dyn Clock>,
        local_zone: String,
    ) -> Self {
        Self {
            store,
            resolver,
            clock,
            simulation: Arc::new(RwLock::new(SimulationEngine::new())),
            local_zone,
        }
    }
}
