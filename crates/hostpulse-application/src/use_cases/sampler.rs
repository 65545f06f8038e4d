//! Counter Sampler Use Case
//!
//! Kernel tick counters are cumulative since boot, so a single reading says
//! nothing about current load. The sampler reads them twice,
//! [`SAMPLING_WINDOW`] apart, and derives utilization from the delta.

use crate::ports::CpuCounterSource;
use hostpulse_domain::constants::SAMPLING_WINDOW;
use hostpulse_domain::error::Result;
use hostpulse_domain::CpuUtilization;
use std::sync::Arc;
use tracing::debug;

/// Two-snapshot CPU utilization sampler
#[derive(Clone)]
pub struct UtilizationSampler {
    source: Arc<dyn CpuCounterSource>,
}

impl UtilizationSampler {
    /// Create a sampler over a counter source
    pub fn new(source: Arc<dyn CpuCounterSource>) -> Self {
        Self { source }
    }

    /// Measure utilization over one sampling window.
    ///
    /// Suspends only the calling task for the window. A failed read of
    /// either snapshot is returned as-is; there is no retry.
    pub async fn sample_utilization(&self) -> Result<CpuUtilization> {
        let earlier = self.source.read_snapshot().await?;
        tokio::time::sleep(SAMPLING_WINDOW).await;
        let later = self.source.read_snapshot().await?;

        let utilization = CpuUtilization::between(&earlier, &later)?;
        debug!(
            cpu_usage_pct = utilization.percent(),
            total_delta = ?later.total().checked_sub(earlier.total()),
            "CPU utilization sampled"
        );
        Ok(utilization)
    }
}
