//! Application Layer - HostPulse
//!
//! Orchestrates one telemetry request:
//!
//! 1. [`UtilizationSampler`] takes two counter snapshots a fixed window apart
//! 2. [`CpuFallbackSelector`] degrades to the load average, then to a note
//! 3. [`TelemetryService`] adds the battery reading and processor count
//!
//! ## Ports (Interfaces)
//!
//! External sources are reached through the traits in [`ports`]; adapters
//! live in `hostpulse-infrastructure`.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `hostpulse-domain`: For value types and the error taxonomy
//! - Pure Rust libraries for async and logging

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
