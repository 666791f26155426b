//! The tracked-clock set and its invariants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zonewall_catalog::FIXED_REFERENCE_ZONE_ID;
use zonewall_core::error::{CLOCK_LIMIT, DomainError};
use zonewall_offset::OffsetResolver;

/// One tracked clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedClock {
    /// Canonical zone identifier.
    pub timezone_id: String,
    /// Whether this is the host's local clock.
    pub is_local: bool,
}

impl TrackedClock {
    /// True when this clock shows the external system's fixed UTC−6
    /// home zone. Derived from the identifier, never stored.
    #[must_use]
    pub fn is_fixed_reference(&self) -> bool {
        self.timezone_id == FIXED_REFERENCE_ZONE_ID
    }
}

/// Persisted wire form of a tracked clock (key `clocks`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedClock {
    /// Canonical zone identifier.
    pub timezone: String,
    /// Whether this is the host's local clock.
    #[serde(rename = "isLocal", default)]
    pub is_local: bool,
}

/// Result of an add attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The clock was appended.
    Added,
    /// The set already holds the maximum number of clocks.
    LimitReached,
    /// The zone was already tracked; the set is unchanged.
    AlreadyTracked,
}

/// The ordered, deduplicated set of tracked clocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSet {
    clocks: Vec<TrackedClock>,
}

impl ClockSet {
    /// Rebuilds the set from persisted state.
    ///
    /// Duplicates are dropped keeping the first occurrence; a local
    /// clock is injected at the front when none survived; an absent or
    /// empty list is replaced by the default pair of the local zone and
    /// the fixed-reference zone.
    #[must_use]
    pub fn from_persisted(persisted: Option<Vec<PersistedClock>>, local_zone: &str) -> Self {
        let Some(persisted) = persisted.filter(|list| !list.is_empty()) else {
            return Self::default_pair(local_zone);
        };

        let mut clocks: Vec<TrackedClock> = Vec::with_capacity(persisted.len());
        let mut seen_local = false;
        for entry in persisted {
            if clocks.iter().any(|c| c.timezone_id == entry.timezone) {
                continue;
            }
            // At most one clock keeps the local flag.
            let is_local = entry.is_local && !seen_local;
            seen_local |= is_local;
            clocks.push(TrackedClock {
                timezone_id: entry.timezone,
                is_local,
            });
        }

        if !seen_local {
            clocks.insert(
                0,
                TrackedClock {
                    timezone_id: local_zone.to_owned(),
                    is_local: true,
                },
            );
        }

        Self { clocks }
    }

    /// The default set: the host's local zone plus the fixed-reference
    /// zone.
    #[must_use]
    pub fn default_pair(local_zone: &str) -> Self {
        Self {
            clocks: vec![
                TrackedClock {
                    timezone_id: local_zone.to_owned(),
                    is_local: true,
                },
                TrackedClock {
                    timezone_id: FIXED_REFERENCE_ZONE_ID.to_owned(),
                    is_local: false,
                },
            ],
        }
    }

    /// The tracked clocks, in display order.
    #[must_use]
    pub fn clocks(&self) -> &[TrackedClock] {
        &self.clocks
    }

    /// Number of tracked clocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    /// True when no clocks are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    /// Appends a non-local clock for `timezone_id`.
    ///
    /// Capacity and duplicate violations leave the set unchanged and
    /// are reported through the outcome.
    pub fn add(&mut self, timezone_id: &str) -> AddOutcome {
        if self.clocks.len() >= CLOCK_LIMIT {
            return AddOutcome::LimitReached;
        }
        if self.clocks.iter().any(|c| c.timezone_id == timezone_id) {
            return AddOutcome::AlreadyTracked;
        }
        self.clocks.push(TrackedClock {
            timezone_id: timezone_id.to_owned(),
            is_local: false,
        });
        AddOutcome::Added
    }

    /// Removes the clock at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIndex` when `index` is out of
    /// range, and `DomainError::LocalClockImmutable` for the local
    /// clock — the picker never offers it, but the invariant is
    /// guarded here as well.
    pub fn remove(&mut self, index: usize) -> Result<TrackedClock, DomainError> {
        let clock = self
            .clocks
            .get(index)
            .ok_or(DomainError::InvalidIndex(index))?;
        if clock.is_local {
            return Err(DomainError::LocalClockImmutable);
        }
        Ok(self.clocks.remove(index))
    }

    /// Re-orders the set ascending by the offset each zone observes at
    /// `instant`. The sort is stable: ties keep their relative order.
    pub fn resort(&mut self, resolver: &dyn OffsetResolver, instant: DateTime<Utc>) {
        self.clocks
            .sort_by_key(|clock| resolver.resolve(&clock.timezone_id, instant).offset_minutes);
    }

    /// The persisted wire form of the set.
    #[must_use]
    pub fn to_persisted(&self) -> Vec<PersistedClock> {
        self.clocks
            .iter()
            .map(|clock| PersistedClock {
                timezone: clock.timezone_id.clone(),
                is_local: clock.is_local,
            })
            .collect()
    }
}
