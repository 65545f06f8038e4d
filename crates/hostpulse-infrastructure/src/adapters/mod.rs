//! Port adapters
//!
//! | Adapter | Port | Source |
//! |---------|------|--------|
//! | [`ProcStatCounterSource`] | `CpuCounterSource` | `/proc/stat` |
//! | [`ProcLoadAverageSource`] | `LoadAverageSource` | `/proc/loadavg` |
//! | [`CommandBatteryProvider`] | `BatteryProvider` | external helper process |
//! | [`SysinfoProcessorCounter`] | `ProcessorCounter` | `sysinfo` |

pub mod battery;
pub mod processors;
pub mod procfs;

pub use battery::CommandBatteryProvider;
pub use processors::SysinfoProcessorCounter;
pub use procfs::{ProcLoadAverageSource, ProcStatCounterSource};
