//! Domain error types.

use thiserror::Error;

/// Maximum number of clocks a tracked set may hold.
pub const CLOCK_LIMIT: usize = 8;

/// Top-level domain error type.
///
/// Every variant is non-fatal and locally recoverable; nothing in the
/// core may terminate the process.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The tracked set already holds the maximum number of clocks.
    #[error("clock limit reached: at most {limit} clocks may be tracked")]
    ClockLimitReached {
        /// The enforced limit.
        limit: usize,
    },

    /// The timezone identifier is not in the catalog.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    /// A simulated-time input could not be parsed.
    #[error("invalid time input: {0}")]
    InvalidTimeInput(String),

    /// A clock index was out of range for the tracked set.
    #[error("clock index out of range: {0}")]
    InvalidIndex(usize),

    /// The sole local clock may not be removed.
    #[error("the local clock cannot be removed")]
    LocalClockImmutable,

    /// A request failed domain validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A persistence or I/O failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
