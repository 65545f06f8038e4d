//! Port interfaces
//!
//! Contracts for the telemetry sources. Each call performs a fresh read;
//! implementations hold no per-request state.

pub mod providers;

pub use providers::{BatteryProvider, CpuCounterSource, LoadAverageSource, ProcessorCounter};
