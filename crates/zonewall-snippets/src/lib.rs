//! Zonewall — snippet generation.
//!
//! Produces three parallel code artifacts per tracked zone — a SQL
//! query expression, an AMPscript block, and an SSJS block — that
//! convert the external scripting system's fixed UTC−6 system time to
//! the zone's local time. The external system has no timezone
//! database, so the artifacts carry precomputed seasonal hour deltas
//! and a manually-corrected DST window.

mod templates;
mod token;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::Serialize;
use zonewall_catalog::{FIXED_REFERENCE_OFFSET_MINUTES, UTC_ZONE_ID};
use zonewall_core::error::DomainError;
use zonewall_offset::OffsetResolver;

/// The three generated artifacts for one zone.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSnippetSet {
    /// SQL query expression for the external system's query activity.
    pub query_expression: String,
    /// AMPscript program.
    pub ampscript: String,
    /// SSJS program.
    pub ssjs: String,
}

/// How a zone is converted, dispatched once per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoneKind {
    /// The host's local zone: the external system converts natively.
    Local,
    /// The synthetic UTC entry: constant +6 hours from system time.
    FixedUtc,
    /// Any other zone: seasonal delta chosen by a DST window.
    General,
}

/// Seasonal conversion data shared by all three artifact templates.
#[derive(Debug, Clone)]
struct ConversionPlan {
    pub(crate) token: String,
    pub(crate) winter_delta_hours: f64,
    pub(crate) summer_delta_hours: f64,
    pub(crate) dst_start: NaiveDate,
    pub(crate) dst_end: NaiveDate,
    pub(crate) year: i32,
}

/// Generates the snippet set for `timezone_id`.
///
/// `instant` is the simulation engine's `current()` and anchors "the
/// current year" for the seasonal probes and the DST window.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the seasonal probe dates
/// cannot be constructed for the instant's year.
pub fn generate(
    resolver: &dyn OffsetResolver,
    local_zone: &str,
    instant: DateTime<Utc>,
    timezone_id: &str,
) -> Result<GeneratedSnippetSet, DomainError> {
    let year = instant.year();
    let plan = conversion_plan(resolver, instant, timezone_id, year)?;

    let kind = if timezone_id == local_zone {
        ZoneKind::Local
    } else if timezone_id == UTC_ZONE_ID {
        ZoneKind::FixedUtc
    } else {
        ZoneKind::General
    };
    tracing::debug!(timezone_id, ?kind, "generating snippets");

    Ok(match kind {
        ZoneKind::Local => GeneratedSnippetSet {
            query_expression: templates::local_query(&plan.token),
            ampscript: templates::local_ampscript(&plan.token),
            ssjs: templates::local_ssjs(&plan.token),
        },
        ZoneKind::FixedUtc => GeneratedSnippetSet {
            query_expression: templates::fixed_utc_query(&plan.token),
            ampscript: templates::fixed_utc_ampscript(&plan.token),
            ssjs: templates::fixed_utc_ssjs(&plan.token),
        },
        ZoneKind::General => GeneratedSnippetSet {
            query_expression: templates::general_query(&plan),
            ampscript: templates::general_ampscript(&plan),
            ssjs: templates::general_ssjs(&plan),
        },
    })
}

fn conversion_plan(
    resolver: &dyn OffsetResolver,
    instant: DateTime<Utc>,
    timezone_id: &str,
    year: i32,
) -> Result<ConversionPlan, DomainError> {
    let january_probe = probe_instant(year, 1)?;
    let july_probe = probe_instant(year, 7)?;

    let winter_offset = resolver.resolve(timezone_id, january_probe).offset_minutes;
    let summer_offset = resolver.resolve(timezone_id, july_probe).offset_minutes;

    // Hours to add to a fixed-reference (UTC−6) timestamp to reach the
    // target zone's wall clock in each season.
    let winter_delta_hours =
        f64::from(winter_offset - FIXED_REFERENCE_OFFSET_MINUTES) / 60.0;
    let summer_delta_hours =
        f64::from(summer_offset - FIXED_REFERENCE_OFFSET_MINUTES) / 60.0;

    // Placeholder window: US-style second Sunday of March through
    // first Sunday of November. The generated artifacts flag it for
    // manual correction.
    let dst_start = NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2)
        .ok_or_else(|| DomainError::Infrastructure(format!("no DST window for year {year}")))?;
    let dst_end = NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1)
        .ok_or_else(|| DomainError::Infrastructure(format!("no DST window for year {year}")))?;

    Ok(ConversionPlan {
        token: token::zone_token(resolver, timezone_id, instant),
        winter_delta_hours,
        summer_delta_hours,
        dst_start,
        dst_end,
        year,
    })
}

fn probe_instant(year: i32, month: u32) -> Result<DateTime<Utc>, DomainError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::Infrastructure(format!("invalid probe date {year}-{month}")))
}
