//! procfs readers
//!
//! Each read opens, reads and closes the file. Nothing is cached between
//! reads, so two snapshots always come from two separate reads.

use crate::error_ext::ReadContext;
use async_trait::async_trait;
use hostpulse_application::ports::{CpuCounterSource, LoadAverageSource};
use hostpulse_domain::error::{Error, Result};
use hostpulse_domain::{CounterSnapshot, LoadAverage};
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

async fn read_interface(path: &Path) -> Result<String> {
    let content = match tokio::fs::read_to_string(path).await {
        // Non-UTF-8 bytes are malformed contents, not an unreadable file
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(Error::parse(format!(
                "{} is not valid UTF-8: {e}",
                path.display()
            )));
        }
        result => result.read_context(path)?,
    };
    trace!(path = %path.display(), bytes = content.len(), "Read kernel interface");
    Ok(content)
}

/// Aggregate CPU tick counters from the kernel statistics file
#[derive(Debug, Clone)]
pub struct ProcStatCounterSource {
    path: PathBuf,
}

impl ProcStatCounterSource {
    /// Create a reader for the given statistics file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CpuCounterSource for ProcStatCounterSource {
    async fn read_snapshot(&self) -> Result<CounterSnapshot> {
        let content = read_interface(&self.path).await?;
        CounterSnapshot::parse_stat(&content)
    }
}

/// One-minute load average from the kernel load-average file
#[derive(Debug, Clone)]
pub struct ProcLoadAverageSource {
    path: PathBuf,
}

impl ProcLoadAverageSource {
    /// Create a reader for the given load-average file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LoadAverageSource for ProcLoadAverageSource {
    async fn read_load_average(&self) -> Result<LoadAverage> {
        let content = read_interface(&self.path).await?;
        LoadAverage::parse(&content)
    }
}
