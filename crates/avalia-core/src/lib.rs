//! avalia-core
//!
//! Pure domain types for a physical-fitness assessment session: the record,
//! field edits, prompt text, chart data, and the analysis state machine.
//! No network dependency.

pub mod chart;
pub mod editor;
pub mod error;
pub mod models;
pub mod prompt;
