//! Zonewall — tracked-clock registry.
//!
//! Owns the ordered, deduplicated set of tracked zones and its
//! invariants: at most one local clock, unique zone identifiers, at
//! most eight members, always sorted ascending by current offset.
//! Mutations round-trip through the state store.

pub mod application;
pub mod domain;
