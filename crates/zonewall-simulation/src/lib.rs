//! Zonewall — time simulation.
//!
//! Owns the single process-wide simulated-instant slot. A simulated
//! instant is entered as a nominal wall-clock reading and reinterpreted
//! as the reading shown by the fixed-reference zone (UTC−6); every
//! other component obtains "now" exclusively through
//! [`SimulationEngine::current`] so the substitution is globally
//! consistent.

mod parse;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use zonewall_catalog::FIXED_REFERENCE_OFFSET_MINUTES;
use zonewall_core::clock::Clock;
use zonewall_core::error::DomainError;

/// Holder of the optional simulated instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationEngine {
    simulated: Option<DateTime<Utc>>,
}

impl SimulationEngine {
    /// Creates an engine with no simulated instant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the simulated instant from a free-text wall-clock reading.
    ///
    /// The text is parsed permissively (see [`parse::parse_nominal`])
    /// and the resulting fields are interpreted as a reading observed
    /// in the fixed-reference zone. Returns the pinned instant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeInput` when the text cannot be
    /// parsed; the previously pinned instant, if any, is untouched.
    pub fn set_from_text(&mut self, input: &str) -> Result<DateTime<Utc>, DomainError> {
        let nominal = parse::parse_nominal(input)?;
        self.pin(nominal)
    }

    /// Pins the simulated instant from explicit wall-clock fields
    /// (1-based month), interpreted as a fixed-reference-zone reading.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeInput` when the fields do not
    /// form a valid calendar date/time.
    #[allow(clippy::too_many_arguments)]
    pub fn set_from_nominal(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<DateTime<Utc>, DomainError> {
        let nominal = chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_milli_opt(hour, minute, second, millisecond))
            .ok_or_else(|| {
                DomainError::InvalidTimeInput(format!(
                    "not a valid date/time: {year}-{month:02}-{day:02} \
                     {hour:02}:{minute:02}:{second:02}.{millisecond:03}"
                ))
            })?;
        self.pin(nominal)
    }

    /// Clears the simulated instant; reads fall back to real time.
    pub fn clear(&mut self) {
        if self.simulated.take().is_some() {
            tracing::info!("simulated instant cleared");
        }
    }

    /// Returns the pinned instant when simulation is active.
    #[must_use]
    pub fn simulated_instant(&self) -> Option<DateTime<Utc>> {
        self.simulated
    }

    /// Returns true while a simulated instant is pinned.
    #[must_use]
    pub fn is_simulated(&self) -> bool {
        self.simulated.is_some()
    }

    /// The engine's notion of "now": the simulated instant when pinned,
    /// otherwise the real clock.
    #[must_use]
    pub fn current(&self, real: &dyn Clock) -> DateTime<Utc> {
        self.simulated.unwrap_or_else(|| real.now())
    }

    fn pin(&mut self, nominal: NaiveDateTime) -> Result<DateTime<Utc>, DomainError> {
        let reference = FixedOffset::east_opt(FIXED_REFERENCE_OFFSET_MINUTES * 60)
            .ok_or_else(|| {
                DomainError::Infrastructure("fixed reference offset out of range".to_owned())
            })?;
        // A fixed offset has no gaps or folds, so the mapping is total.
        let instant = nominal
            .and_local_timezone(reference)
            .single()
            .ok_or_else(|| {
                DomainError::InvalidTimeInput("ambiguous wall-clock reading".to_owned())
            })?
            .with_timezone(&Utc);

        self.simulated = Some(instant);
        tracing::info!(%instant, "simulated instant pinned");
        Ok(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;
    use zonewall_test_support::FixedClock;

    #[test]
    fn test_nominal_reading_is_reinterpreted_as_utc_minus_6() {
        let mut engine = SimulationEngine::new();
        let pinned = engine.set_from_nominal(2024, 6, 15, 10, 0, 0, 0).unwrap();
        assert_eq!(pinned, Utc.with_ymd_and_hms(2024, 6, 15, 16, 0, 0).unwrap());
    }

    #[test]
    fn test_free_text_reading_pins_the_same_instant() {
        let mut engine = SimulationEngine::new();
        let pinned = engine.set_from_text("2024-06-15 10:00:00").unwrap();
        assert_eq!(pinned, Utc.with_ymd_and_hms(2024, 6, 15, 16, 0, 0).unwrap());
        assert!(engine.is_simulated());
    }

    #[test]
    fn test_rfc3339_reading_drops_its_offset_marker() {
        let mut engine = SimulationEngine::new();
        let pinned = engine.set_from_text("2024-06-15T10:00:00Z").unwrap();
        // The Z suffix does not make this a UTC reading; the wall-clock
        // fields are still reinterpreted as UTC-6.
        assert_eq!(pinned, Utc.with_ymd_and_hms(2024, 6, 15, 16, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let mut engine = SimulationEngine::new();
        let result = engine.set_from_nominal(2024, 2, 30, 0, 0, 0, 0);
        assert!(matches!(result, Err(DomainError::InvalidTimeInput(_))));
    }

    #[test]
    fn test_failed_parse_preserves_previous_instant() {
        let mut engine = SimulationEngine::new();
        let pinned = engine.set_from_text("2024-06-15 10:00").unwrap();

        let result = engine.set_from_text("half past never");
        assert!(matches!(result, Err(DomainError::InvalidTimeInput(_))));
        assert_eq!(engine.simulated_instant(), Some(pinned));
    }

    #[test]
    fn test_current_prefers_simulated_then_falls_back() {
        let real = FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
        let mut engine = SimulationEngine::new();
        assert_eq!(engine.current(&real), real.0);

        let pinned = engine.set_from_text("2024-06-15 10:00:00").unwrap();
        assert_eq!(engine.current(&real), pinned);

        engine.clear();
        assert_eq!(engine.current(&real), real.0);
        assert!(!engine.is_simulated());
    }
}
