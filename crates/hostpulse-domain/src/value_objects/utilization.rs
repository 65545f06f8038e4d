//! CPU utilization derived from two counter snapshots

use super::counters::CounterSnapshot;
use crate::constants::MAX_UTILIZATION_PCT;
use crate::error::{Error, Result};
use serde::Serialize;

/// Busy percentage of all processors over a sampling window, in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CpuUtilization(f64);

impl CpuUtilization {
    /// Compute utilization from an earlier and a later snapshot.
    ///
    /// `busy = 1 - idle_delta / total_delta`, where idle includes iowait.
    /// A non-positive total delta is [`Error::InvalidDelta`], never 0%.
    /// Counters are not assumed monotonic, so the result is clamped.
    pub fn between(earlier: &CounterSnapshot, later: &CounterSnapshot) -> Result<Self> {
        let total_delta = signed(later.total()) - signed(earlier.total());
        if total_delta <= 0 {
            return Err(Error::invalid_delta(total_delta));
        }
        let idle_delta = signed(later.idle()) - signed(earlier.idle());

        let busy = (1.0 - idle_delta as f64 / total_delta as f64) * MAX_UTILIZATION_PCT;
        Ok(Self(busy.clamp(0.0, MAX_UTILIZATION_PCT)))
    }

    /// Percentage value
    pub fn percent(self) -> f64 {
        self.0
    }
}

// Sums of eight u64 counters always fit.
fn signed(ticks: u128) -> i128 {
    i128::try_from(ticks).unwrap_or(i128::MAX)
}
