//! Timezone-database-backed resolver.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, OffsetName, Tz};
use zonewall_catalog::{FIXED_REFERENCE_OFFSET_MINUTES, FIXED_REFERENCE_ZONE_ID, UTC_ZONE_ID};

use crate::{DstStatus, OffsetResolver, OffsetSnapshot};

/// Production resolver over the bundled timezone database.
///
/// The two synthetic zones are answered from constants: they never
/// observe daylight saving. Everything else is looked up per instant,
/// and identifiers the database does not know degrade to a UTC
/// snapshot rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzdbResolver;

impl TzdbResolver {
    /// Creates a resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn parse_zone(timezone_id: &str) -> Option<Tz> {
        match timezone_id.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                tracing::warn!(timezone_id, "unknown timezone, degrading to UTC");
                None
            }
        }
    }
}

impl OffsetResolver for TzdbResolver {
    fn resolve(&self, timezone_id: &str, instant: DateTime<Utc>) -> OffsetSnapshot {
        if timezone_id == UTC_ZONE_ID {
            return OffsetSnapshot::new(0, DstStatus::NotApplicable);
        }
        if timezone_id == FIXED_REFERENCE_ZONE_ID {
            return OffsetSnapshot::new(FIXED_REFERENCE_OFFSET_MINUTES, DstStatus::NotApplicable);
        }

        let Some(tz) = Self::parse_zone(timezone_id) else {
            return OffsetSnapshot::new(0, DstStatus::NotApplicable);
        };

        let offset = tz.offset_from_utc_datetime(&instant.naive_utc());
        let offset_minutes = offset.fix().local_minus_utc() / 60;
        let dst = if offset.dst_offset().is_zero() {
            DstStatus::Winter
        } else {
            DstStatus::Summer
        };

        OffsetSnapshot::new(offset_minutes, dst)
    }

    fn short_alias(&self, timezone_id: &str, instant: DateTime<Utc>) -> String {
        if timezone_id == UTC_ZONE_ID {
            return "UTC".to_owned();
        }

        let Some(tz) = Self::parse_zone(timezone_id) else {
            return "UTC".to_owned();
        };

        let offset = tz.offset_from_utc_datetime(&instant.naive_utc());
        match offset.abbreviation() {
            Some(abbreviation) => abbreviation.to_owned(),
            None => {
                // Zones without a letter abbreviation get a numeric one.
                let minutes = offset.fix().local_minus_utc() / 60;
                let sign = if minutes < 0 { '-' } else { '+' };
                let abs = minutes.unsigned_abs();
                format!("{sign}{:02}{:02}", abs / 60, abs % 60)
            }
        }
    }
}
