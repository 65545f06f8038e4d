//! Domain layer constants
//!
//! Measurement constants shared by the sampler and the report assembly.
//! Deployment defaults (paths, ports, helper command) live in
//! `hostpulse_infrastructure::constants`.

use std::time::Duration;

// ============================================================================
// SAMPLING CONSTANTS
// ============================================================================

/// Delay between the two counter snapshots of one utilization sample.
///
/// At the common 100 Hz tick rate this accumulates about 20 ticks per logical
/// processor, enough to resolve a percentage while keeping a request under a
/// quarter of a second. Changing it changes the accuracy of every reading.
pub const SAMPLING_WINDOW: Duration = Duration::from_millis(200);

/// Number of CPU accounting categories retained from the aggregate line
pub const CPU_CATEGORY_COUNT: usize = 8;

/// Minimum numeric fields required on the aggregate line (user nice system idle)
pub const MIN_COUNTER_FIELDS: usize = 4;

/// Label of the aggregate CPU line in the kernel statistics file
pub const AGGREGATE_CPU_LABEL: &str = "cpu";

/// Upper bound of a utilization percentage
pub const MAX_UTILIZATION_PCT: f64 = 100.0;

// ============================================================================
// REPORT CONSTANTS
// ============================================================================

/// Prefix of the note emitted when no CPU metric could be measured
pub const CPU_UNAVAILABLE_NOTE: &str = "CPU metrics unavailable";
