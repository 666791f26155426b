//! Key/value state-store abstraction.
//!
//! The persistence contract is a flat map of string keys to JSON values,
//! mirroring the browser-storage model the clock state originally lived
//! in. Known keys: `clocks`, `theme`, `displayMode`.

use async_trait::async_trait;

use crate::error::DomainError;

/// Persisted key for the tracked-clock list.
pub const CLOCKS_KEY: &str = "clocks";
/// Persisted key for the UI theme.
pub const THEME_KEY: &str = "theme";
/// Persisted key for the analog/digital display mode.
pub const DISPLAY_MODE_KEY: &str = "displayMode";

/// String-keyed JSON state store.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), DomainError>;
}
