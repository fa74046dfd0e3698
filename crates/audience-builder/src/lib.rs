//! Audience and assignment-rule normalization for evaluation campaigns.
//!
//! The [`audience`] module turns untrusted configuration payloads into typed,
//! bounded values and converts participant lists to and from their storage
//! shape. Nothing in it fails: malformed input degrades to defaults.

pub mod audience;
pub mod config;
pub mod error;
pub mod telemetry;
