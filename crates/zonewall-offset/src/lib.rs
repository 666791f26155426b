//! Zonewall — offset resolution.
//!
//! Maps `(timezone identifier, instant)` to offset metadata. The
//! production resolver is backed by the bundled timezone database; the
//! trait exists so tests (and any future backend) can substitute the
//! lookup without touching callers. Offset text handling stays inside
//! this crate.

mod resolver;
mod snapshot;

pub use resolver::TzdbResolver;
pub use snapshot::{DstStatus, OffsetSnapshot, format_offset_label};

use chrono::{DateTime, Utc};

/// Resolves a zone's offset metadata at a given instant.
pub trait OffsetResolver: Send + Sync {
    /// Returns the offset snapshot the zone observes at `instant`.
    ///
    /// Never fails: unknown or unresolvable identifiers degrade to a
    /// UTC snapshot and are logged by the implementation.
    fn resolve(&self, timezone_id: &str, instant: DateTime<Utc>) -> OffsetSnapshot;

    /// Returns a short display alias for the zone at `instant`, such as
    /// a timezone abbreviation (`CET`, `JST`) or a numeric offset form.
    fn short_alias(&self, timezone_id: &str, instant: DateTime<Utc>) -> String;
}
