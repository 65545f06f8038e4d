//! Infrastructure layer constants
//!
//! Deployment defaults. Measurement constants are defined in
//! `hostpulse_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hostpulse.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hostpulse";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "HOSTPULSE";

/// Separator for nested keys in environment variables (`HOSTPULSE_SERVER__PORT`)
pub const CONFIG_ENV_NESTING: &str = "__";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address (all interfaces)
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8787;

// ============================================================================
// KERNEL INTERFACE CONSTANTS
// ============================================================================

/// Kernel CPU statistics file
pub const PROC_STAT_PATH: &str = "/proc/stat";

/// Kernel load average file
pub const PROC_LOADAVG_PATH: &str = "/proc/loadavg";

// ============================================================================
// BATTERY HELPER CONSTANTS
// ============================================================================

/// Default battery status helper
pub const DEFAULT_BATTERY_COMMAND: &str = "termux-battery-status";

/// Default helper timeout in seconds
pub const DEFAULT_BATTERY_TIMEOUT_SECS: u64 = 5;

/// Default remediation text when the helper fails
pub const DEFAULT_BATTERY_HINT: &str = "Install Termux:API and run `pkg install termux-api`";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "HOSTPULSE_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "hostpulse";
