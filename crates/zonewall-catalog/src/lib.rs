//! Zonewall — static timezone catalog.
//!
//! A fixed table of the zones the picker offers, each carrying the
//! canonical IANA identifier, the name the external fixed-offset
//! scripting system knows the zone by, a display label, and extra
//! search aliases. Loaded once; never mutated.

mod data;

pub use data::CATALOG;

/// Canonical identifier of the synthetic UTC entry.
pub const UTC_ZONE_ID: &str = "UTC";

/// Canonical identifier of the fixed-reference zone — the external
/// scripting system's home zone, permanently at UTC−6.
pub const FIXED_REFERENCE_ZONE_ID: &str = "Etc/GMT+6";

/// Offset of the fixed-reference zone, in minutes.
pub const FIXED_REFERENCE_OFFSET_MINUTES: i32 = -360;

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneDescriptor {
    /// Canonical zone identifier (IANA name or synthetic fixed-offset).
    pub id: &'static str,
    /// The external scripting system's name for this zone.
    pub alternate_name: &'static str,
    /// Human display label.
    pub label: &'static str,
    /// Extra lowercase search terms (cities, country names).
    pub search_aliases: &'static str,
}

impl TimezoneDescriptor {
    /// Returns true when `filter` matches the label, identifier, or any
    /// search alias, case-insensitively. An empty filter matches all.
    #[must_use]
    pub fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.label.to_lowercase().contains(&needle)
            || self.id.to_lowercase().contains(&needle)
            || self.search_aliases.to_lowercase().contains(&needle)
    }
}

/// Looks up a descriptor by canonical identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static TimezoneDescriptor> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Returns true when the identifier is in the catalog.
#[must_use]
pub fn is_known(id: &str) -> bool {
    find(id).is_some()
}

/// Display label for an identifier: the catalog label when present,
/// otherwise a prettified form of the identifier itself
/// (`America/Sao_Paulo` → `America / Sao Paulo`).
#[must_use]
pub fn display_label(id: &str) -> String {
    match find(id) {
        Some(descriptor) => descriptor.label.to_owned(),
        None => id.replace('_', " ").split('/').collect::<Vec<_>>().join(" / "),
    }
}
