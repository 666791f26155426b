//! Route modules organized by concern.

pub mod catalog;
pub mod clocks;
pub mod health;
pub mod preferences;
pub mod simulation;
pub mod snippets;
