//! Battery helper configuration types

use crate::constants::{DEFAULT_BATTERY_COMMAND, DEFAULT_BATTERY_HINT, DEFAULT_BATTERY_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// External battery helper configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// Program to run (no arguments are passed)
    pub command: String,
    /// Seconds to wait before killing the helper
    pub timeout_secs: u64,
    /// Remediation text returned when the helper fails
    pub hint: String,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_BATTERY_COMMAND.to_string(),
            timeout_secs: DEFAULT_BATTERY_TIMEOUT_SECS,
            hint: DEFAULT_BATTERY_HINT.to_string(),
        }
    }
}

impl BatteryConfig {
    /// Helper timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
