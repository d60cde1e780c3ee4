//! Core engine for IESS CD 513 occupational-safety indicator reporting.
//!
//! The crate turns validated monthly activity records into the eleven
//! regulatory indicators, a weighted management index, per-indicator
//! compliance verdicts, and an annual summary with trend classification.
//! Everything in [`indicators`] is a pure function of its inputs; the
//! surrounding modules carry runtime configuration, telemetry, and the
//! top-level error type shared with the service crates.

pub mod config;
pub mod error;
pub mod indicators;
pub mod telemetry;
