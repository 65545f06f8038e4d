//! Value objects
//!
//! Immutable, per-request values. Nothing here is cached or shared between
//! requests.

pub mod battery;
pub mod counters;
pub mod load_average;
pub mod report;
pub mod utilization;

pub use battery::BatteryReading;
pub use counters::{CounterSnapshot, CpuCategory};
pub use load_average::LoadAverage;
pub use report::{CpuReading, TelemetryReport};
pub use utilization::CpuUtilization;
