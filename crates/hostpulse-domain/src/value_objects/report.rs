//! Telemetry report served to polling clients
//!
//! Field presence is fixed by the CPU reading:
//!
//! | Reading | `cpu_usage_pct` | `load_avg_1` | `note` |
//! |---------|-----------------|--------------|--------|
//! | utilization | yes | no | no |
//! | load average | no | yes | yes |
//! | unavailable | no | no | yes |
//!
//! `cpus` and `battery` are always present.

use super::battery::BatteryReading;
use super::load_average::LoadAverage;
use super::utilization::CpuUtilization;
use crate::constants::CPU_UNAVAILABLE_NOTE;
use serde::Serialize;

/// Outcome of the CPU fallback chain
#[derive(Debug, Clone, PartialEq)]
pub enum CpuReading {
    /// Two-snapshot utilization succeeded
    Utilization(CpuUtilization),
    /// Sampling failed; the one-minute load average stands in
    LoadAverage {
        /// Substitute metric
        load: LoadAverage,
        /// Why the substitute is reported
        note: String,
    },
    /// Neither source could be read
    Unavailable {
        /// Why no CPU metric is reported
        note: String,
    },
}

impl CpuReading {
    /// Load-average substitute, noting the sampler failure
    pub fn load_average(load: LoadAverage, sampler_error: &impl std::fmt::Display) -> Self {
        Self::LoadAverage {
            load,
            note: format!(
                "cpu_usage_pct unavailable ({sampler_error}); load_avg_1 is the 1-minute load average, not a percentage"
            ),
        }
    }

    /// No CPU metric, noting both failures
    pub fn unavailable(
        sampler_error: &impl std::fmt::Display,
        load_error: &impl std::fmt::Display,
    ) -> Self {
        Self::Unavailable {
            note: format!(
                "{CPU_UNAVAILABLE_NOTE}: sampler failed ({sampler_error}); load average failed ({load_error})"
            ),
        }
    }
}

/// Flat telemetry document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryReport {
    /// Busy percentage, when measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_usage_pct: Option<f64>,
    /// One-minute load average, only as a fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_avg_1: Option<f64>,
    /// Explanation when degraded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Logical processors on the host
    pub cpus: usize,
    /// Battery helper output or failure object
    pub battery: BatteryReading,
}

impl TelemetryReport {
    /// Assemble the report from its parts
    pub fn assemble(cpu: CpuReading, cpus: usize, battery: BatteryReading) -> Self {
        let (cpu_usage_pct, load_avg_1, note) = match cpu {
            CpuReading::Utilization(u) => (Some(u.percent()), None, None),
            CpuReading::LoadAverage { load, note } => (None, Some(load.one_minute()), Some(note)),
            CpuReading::Unavailable { note } => (None, None, Some(note)),
        };
        Self {
            cpu_usage_pct,
            load_avg_1,
            note,
            cpus,
            battery,
        }
    }
}
