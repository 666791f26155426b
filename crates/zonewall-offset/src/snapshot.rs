//! Offset snapshot types.

use serde::{Deserialize, Serialize};

/// Daylight-saving status of a zone at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DstStatus {
    /// The zone is observing daylight-saving time.
    #[serde(rename = "SUMMER")]
    Summer,
    /// The zone is on standard time.
    #[serde(rename = "WINTER")]
    Winter,
    /// The zone never observes daylight saving (synthetic fixed zones).
    #[serde(rename = "not-applicable")]
    NotApplicable,
}

/// Offset metadata for one zone at one instant. Ephemeral — recomputed
/// on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetSnapshot {
    /// Signed UTC offset in minutes; positive means ahead of UTC.
    pub offset_minutes: i32,
    /// `GMT±HH:MM` display form of the offset.
    pub offset_label: String,
    /// Daylight-saving status.
    pub dst: DstStatus,
}

impl OffsetSnapshot {
    /// Builds a snapshot from an offset, deriving the label.
    #[must_use]
    pub fn new(offset_minutes: i32, dst: DstStatus) -> Self {
        Self {
            offset_minutes,
            offset_label: format_offset_label(offset_minutes),
            dst,
        }
    }
}

/// Formats a signed minute offset as `GMT±HH:MM`.
#[must_use]
pub fn format_offset_label(offset_minutes: i32) -> String {
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let abs = offset_minutes.unsigned_abs();
    format!("GMT{sign}{:02}:{:02}", abs / 60, abs % 60)
}
