//! Zonewall Core — shared abstractions.
//!
//! This crate defines the traits and error types every other Zonewall
//! crate depends on. It contains no timezone data and no infrastructure
//! code.

pub mod clock;
pub mod error;
pub mod store;
