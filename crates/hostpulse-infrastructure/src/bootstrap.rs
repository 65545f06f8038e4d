//! Service bootstrap
//!
//! Wires the configured adapters into a [`TelemetryService`]. The service is
//! built once at startup and shared read-only by every request.

use crate::adapters::{
    CommandBatteryProvider, ProcLoadAverageSource, ProcStatCounterSource, SysinfoProcessorCounter,
};
use crate::config::AppConfig;
use hostpulse_application::TelemetryService;
use std::sync::Arc;
use tracing::info;

/// Build the telemetry service from configuration
pub fn build_telemetry_service(config: &AppConfig) -> TelemetryService {
    info!(
        stat_path = %config.procfs.stat_path.display(),
        loadavg_path = %config.procfs.loadavg_path.display(),
        battery_command = %config.battery.command,
        "Wiring telemetry sources"
    );

    TelemetryService::new(
        Arc::new(ProcStatCounterSource::new(&config.procfs.stat_path)),
        Arc::new(ProcLoadAverageSource::new(&config.procfs.loadavg_path)),
        Arc::new(CommandBatteryProvider::from_config(&config.battery)),
        Arc::new(SysinfoProcessorCounter::new()),
    )
}
