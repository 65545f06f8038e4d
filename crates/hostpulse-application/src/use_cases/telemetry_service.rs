//! Telemetry Service Use Case
//!
//! Builds one [`TelemetryReport`] per request. The CPU chain and the battery
//! helper run concurrently; neither can fail the report.

use super::fallback::CpuFallbackSelector;
use super::sampler::UtilizationSampler;
use crate::ports::{BatteryProvider, CpuCounterSource, LoadAverageSource, ProcessorCounter};
use hostpulse_domain::{BatteryReading, TelemetryReport};
use std::sync::Arc;
use tracing::{debug, warn};

/// Assembles telemetry reports from the configured sources
#[derive(Clone)]
pub struct TelemetryService {
    cpu: CpuFallbackSelector,
    battery: Arc<dyn BatteryProvider>,
    processors: Arc<dyn ProcessorCounter>,
}

impl TelemetryService {
    /// Create the service with injected sources
    pub fn new(
        counters: Arc<dyn CpuCounterSource>,
        load_average: Arc<dyn LoadAverageSource>,
        battery: Arc<dyn BatteryProvider>,
        processors: Arc<dyn ProcessorCounter>,
    ) -> Self {
        Self {
            cpu: CpuFallbackSelector::new(UtilizationSampler::new(counters), load_average),
            battery,
            processors,
        }
    }

    /// Collect a fresh report
    pub async fn collect(&self) -> TelemetryReport {
        let (cpu, battery) = tokio::join!(self.cpu.select(), self.read_battery());
        let cpus = self.processors.logical_processors();

        let report = TelemetryReport::assemble(cpu, cpus, battery);
        debug!(
            cpu_usage_pct = ?report.cpu_usage_pct,
            load_avg_1 = ?report.load_avg_1,
            cpus = report.cpus,
            battery_available = report.battery.is_available(),
            "Telemetry report assembled"
        );
        report
    }

    async fn read_battery(&self) -> BatteryReading {
        match self.battery.query().await {
            Ok(reading) => reading,
            Err(e) => {
                warn!(error = %e, command = self.battery.command(), "Battery helper failed");
                BatteryReading::unavailable(
                    e.to_string(),
                    self.battery.remediation_hint(),
                    self.battery.command(),
                )
            }
        }
    }
}
