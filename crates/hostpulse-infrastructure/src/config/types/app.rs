//! Main application configuration

use super::{BatteryConfig, LoggingConfig, ProcfsConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,
    /// Kernel interface paths
    #[serde(default)]
    pub procfs: ProcfsConfig,
    /// Battery helper
    #[serde(default)]
    pub battery: BatteryConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
