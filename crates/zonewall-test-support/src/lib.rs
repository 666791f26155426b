//! Shared test mocks and utilities for the Zonewall engine.

mod clock;
mod resolver;
mod store;

pub use clock::FixedClock;
pub use resolver::FixedOffsetResolver;
pub use store::{FailingStore, InMemoryStore};
