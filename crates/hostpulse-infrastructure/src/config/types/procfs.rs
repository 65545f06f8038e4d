//! Kernel interface configuration types

use crate::constants::{PROC_LOADAVG_PATH, PROC_STAT_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths of the kernel telemetry files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcfsConfig {
    /// CPU statistics file
    pub stat_path: PathBuf,
    /// Load average file
    pub loadavg_path: PathBuf,
}

impl Default for ProcfsConfig {
    fn default() -> Self {
        Self {
            stat_path: PathBuf::from(PROC_STAT_PATH),
            loadavg_path: PathBuf::from(PROC_LOADAVG_PATH),
        }
    }
}
