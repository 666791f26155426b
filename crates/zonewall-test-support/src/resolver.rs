//! Deterministic `OffsetResolver` backed by a fixed per-zone table.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use zonewall_offset::{DstStatus, OffsetResolver, OffsetSnapshot};

#[derive(Debug, Clone)]
struct ZoneEntry {
    winter_minutes: i32,
    summer_minutes: i32,
    alias: String,
}

/// A resolver that answers from a fixed table instead of the timezone
/// database. Months April through September count as "summer".
/// Zones not in the table degrade to a UTC snapshot, mirroring the
/// production fallback.
#[derive(Debug, Default)]
pub struct FixedOffsetResolver {
    zones: HashMap<String, ZoneEntry>,
}

impl FixedOffsetResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a zone with its winter/summer offsets and short alias.
    #[must_use]
    pub fn with_zone(
        mut self,
        timezone_id: &str,
        winter_minutes: i32,
        summer_minutes: i32,
        alias: &str,
    ) -> Self {
        self.zones.insert(
            timezone_id.to_owned(),
            ZoneEntry {
                winter_minutes,
                summer_minutes,
                alias: alias.to_owned(),
            },
        );
        self
    }

    fn is_summer(instant: DateTime<Utc>) -> bool {
        (4..=9).contains(&instant.month())
    }
}

impl OffsetResolver for FixedOffsetResolver {
    fn resolve(&self, timezone_id: &str, instant: DateTime<Utc>) -> OffsetSnapshot {
        let Some(entry) = self.zones.get(timezone_id) else {
            return OffsetSnapshot::new(0, DstStatus::NotApplicable);
        };

        if entry.winter_minutes == entry.summer_minutes {
            return OffsetSnapshot::new(entry.winter_minutes, DstStatus::NotApplicable);
        }
        if Self::is_summer(instant) {
            OffsetSnapshot::new(entry.summer_minutes, DstStatus::Summer)
        } else {
            OffsetSnapshot::new(entry.winter_minutes, DstStatus::Winter)
        }
    }

    fn short_alias(&self, timezone_id: &str, _instant: DateTime<Utc>) -> String {
        self.zones
            .get(timezone_id)
            .map_or_else(|| "UTC".to_owned(), |entry| entry.alias.clone())
    }
}
