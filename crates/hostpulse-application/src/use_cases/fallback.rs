//! CPU Fallback Selector
//!
//! First success wins:
//!
//! 1. Two-snapshot utilization
//! 2. One-minute load average, tagged with a note
//! 3. No CPU metric, with a note naming both failures

use super::sampler::UtilizationSampler;
use crate::ports::LoadAverageSource;
use hostpulse_domain::CpuReading;
use std::sync::Arc;
use tracing::warn;

/// Selects the best available CPU metric for one request
#[derive(Clone)]
pub struct CpuFallbackSelector {
    sampler: UtilizationSampler,
    load_average: Arc<dyn LoadAverageSource>,
}

impl CpuFallbackSelector {
    /// Create a selector from the primary sampler and the load-average source
    pub fn new(sampler: UtilizationSampler, load_average: Arc<dyn LoadAverageSource>) -> Self {
        Self {
            sampler,
            load_average,
        }
    }

    /// Run the fallback chain. Never fails; degradation is carried in the reading.
    pub async fn select(&self) -> CpuReading {
        let sampler_error = match self.sampler.sample_utilization().await {
            Ok(utilization) => return CpuReading::Utilization(utilization),
            Err(e) => e,
        };
        warn!(error = %sampler_error, "CPU sampling failed, falling back to load average");

        match self.load_average.read_load_average().await {
            Ok(load) => CpuReading::load_average(load, &sampler_error),
            Err(load_error) => {
                warn!(error = %load_error, "Load average unavailable");
                CpuReading::unavailable(&sampler_error, &load_error)
            }
        }
    }
}
