//! Telemetry source ports

use async_trait::async_trait;
use hostpulse_domain::error::Result;
use hostpulse_domain::{BatteryReading, CounterSnapshot, LoadAverage};

// ============================================================================
// CPU Counter Source
// ============================================================================

/// Source of cumulative CPU tick counters
#[async_trait]
pub trait CpuCounterSource: Send + Sync {
    /// Read one snapshot of the aggregate counters.
    ///
    /// Fails with `Error::Read` when the interface cannot be read and
    /// `Error::Parse` when its contents are malformed.
    async fn read_snapshot(&self) -> Result<CounterSnapshot>;
}

// ============================================================================
// Load Average Source
// ============================================================================

/// Source of the kernel's one-minute load average
#[async_trait]
pub trait LoadAverageSource: Send + Sync {
    /// Read the current one-minute load average
    async fn read_load_average(&self) -> Result<LoadAverage>;
}

// ============================================================================
// Battery Provider
// ============================================================================

/// External battery status helper
#[async_trait]
pub trait BatteryProvider: Send + Sync {
    /// Invoke the helper and return its parsed output.
    ///
    /// Fails with `Error::HelperInvocation` when the helper cannot be run.
    async fn query(&self) -> Result<BatteryReading>;

    /// Command the provider runs, echoed in failure objects
    fn command(&self) -> &str;

    /// Remediation text shown when the helper fails
    fn remediation_hint(&self) -> &str;
}

// ============================================================================
// Processor Counter
// ============================================================================

/// Logical processor count of the host
pub trait ProcessorCounter: Send + Sync {
    /// Number of logical processors, at least 1
    fn logical_processors(&self) -> usize;
}
