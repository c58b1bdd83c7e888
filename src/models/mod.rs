//! Core data models for the storage pipeline.
//!
//! These entities describe what the catalog remembers about each accepted
//! object, the running statistics, and the activity log. They serialize
//! naturally as JSON via `serde`.

pub mod log;
pub mod object;
pub mod stats;
