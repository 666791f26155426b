//! Zonewall API — router, state, and error mapping.
//!
//! The binary entry point lives in `main.rs`; everything here is also
//! reachable from the integration tests.

pub mod error;
pub mod routes;
pub mod state;
