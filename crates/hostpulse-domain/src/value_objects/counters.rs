//! Cumulative CPU tick counters
//!
//! The kernel exposes per-category tick totals accumulated since boot on the
//! aggregate `cpu` line of its statistics file:
//!
//! ```text
//! cpu  user nice system idle iowait irq softirq steal guest guest_nice
//! ```
//!
//! Older kernels report fewer columns. Categories the host does not report
//! are zero in the snapshot.

use crate::constants::{AGGREGATE_CPU_LABEL, CPU_CATEGORY_COUNT, MIN_COUNTER_FIELDS};
use crate::error::{Error, Result};
use serde::Serialize;

/// CPU accounting categories in the kernel's column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpuCategory {
    User,
    Nice,
    System,
    Idle,
    Iowait,
    Irq,
    Softirq,
    Steal,
}

impl CpuCategory {
    /// All categories in column order
    pub const ALL: [CpuCategory; CPU_CATEGORY_COUNT] = [
        CpuCategory::User,
        CpuCategory::Nice,
        CpuCategory::System,
        CpuCategory::Idle,
        CpuCategory::Iowait,
        CpuCategory::Irq,
        CpuCategory::Softirq,
        CpuCategory::Steal,
    ];

    /// Position of this category on the aggregate line, label excluded
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether ticks in this category count as idle time.
    ///
    /// Time blocked on I/O is time the processor had nothing to run, so
    /// `iowait` is idle alongside `idle`.
    pub const fn is_idle(self) -> bool {
        matches!(self, CpuCategory::Idle | CpuCategory::Iowait)
    }
}

/// Point-in-time reading of cumulative tick counters since boot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterSnapshot {
    ticks: [u64; CPU_CATEGORY_COUNT],
}

impl CounterSnapshot {
    /// Build a snapshot from ticks in column order
    pub const fn new(ticks: [u64; CPU_CATEGORY_COUNT]) -> Self {
        Self { ticks }
    }

    /// Find the aggregate `cpu` line in the statistics file and parse it
    pub fn parse_stat(content: &str) -> Result<Self> {
        content
            .lines()
            .find(|line| line.split_whitespace().next() == Some(AGGREGATE_CPU_LABEL))
            .ok_or_else(|| Error::parse("no aggregate cpu line found"))
            .and_then(Self::parse_line)
    }

    /// Parse one accounting line, discarding its leading label.
    ///
    /// Every numeric column must be a valid unsigned integer. Columns beyond
    /// the retained categories are validated and then dropped.
    pub fn parse_line(line: &str) -> Result<Self> {
        let mut fields = line.split_whitespace();
        if fields.next().is_none() {
            return Err(Error::parse("empty cpu line"));
        }

        let mut ticks = [0u64; CPU_CATEGORY_COUNT];
        let mut count = 0usize;
        for field in fields {
            let value: u64 = field
                .parse()
                .map_err(|e| Error::parse(format!("invalid tick count {field:?}: {e}")))?;
            if let Some(slot) = ticks.get_mut(count) {
                *slot = value;
            }
            count += 1;
        }

        if count < MIN_COUNTER_FIELDS {
            return Err(Error::parse(format!(
                "cpu line too short: expected at least {MIN_COUNTER_FIELDS} fields, got {count}"
            )));
        }

        Ok(Self { ticks })
    }

    /// Ticks recorded for one category
    pub fn get(&self, category: CpuCategory) -> u64 {
        self.ticks[category.index()]
    }

    /// Ticks in column order
    pub fn ticks(&self) -> &[u64; CPU_CATEGORY_COUNT] {
        &self.ticks
    }

    /// Sum of all categories
    pub fn total(&self) -> u128 {
        self.ticks.iter().map(|&t| u128::from(t)).sum()
    }

    /// Sum of the categories counted as idle
    pub fn idle(&self) -> u128 {
        CpuCategory::ALL
            .iter()
            .filter(|c| c.is_idle())
            .map(|&c| u128::from(self.get(c)))
            .sum()
    }
}

impl From<[u64; CPU_CATEGORY_COUNT]> for CounterSnapshot {
    fn from(ticks: [u64; CPU_CATEGORY_COUNT]) -> Self {
        Self::new(ticks)
    }
}
