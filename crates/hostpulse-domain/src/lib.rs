//! # HostPulse Domain
//!
//! Core types for host telemetry: cumulative CPU counter snapshots, the
//! utilization computed from two of them, the load-average fallback, and the
//! flat report document served to polling clients.
//!
//! This crate performs no I/O. Reading `/proc`, running the battery helper and
//! serving HTTP live in the infrastructure and server crates.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CounterSnapshot`] | Point-in-time cumulative tick counters per CPU category |
//! | [`CpuUtilization`] | Busy percentage derived from two snapshots |
//! | [`LoadAverage`] | One-minute load average |
//! | [`CpuReading`] | Outcome of the CPU fallback chain |
//! | [`BatteryReading`] | Battery helper passthrough or failure object |
//! | [`TelemetryReport`] | The response document |

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
