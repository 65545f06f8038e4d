//! Logical processor count

use hostpulse_application::ports::ProcessorCounter;
use sysinfo::{CpuRefreshKind, System};

/// Processor counter backed by `sysinfo`
///
/// Falls back to the standard library's parallelism hint when `sysinfo`
/// cannot enumerate processors, and to 1 when neither can.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProcessorCounter;

impl SysinfoProcessorCounter {
    /// Create a counter
    pub fn new() -> Self {
        Self
    }
}

impl ProcessorCounter for SysinfoProcessorCounter {
    fn logical_processors(&self) -> usize {
        let mut system = System::new();
        system.refresh_cpu_list(CpuRefreshKind::nothing());
        match system.cpus().len() {
            0 => std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
            n => n,
        }
    }
}
