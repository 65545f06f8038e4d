//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hostpulse_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load and validate configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (see [`Self::resolve_config_file`])
    /// 3. Environment variables with prefix (e.g., `HOSTPULSE_SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let app_config = self.load_unvalidated()?;
        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Merge all sources without validating the result
    ///
    /// For callers that layer further overrides before calling
    /// [`validate_app_config`] themselves.
    pub fn load_unvalidated(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = self.resolve_config_file().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(config_path));
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_NESTING),
        );

        figment
            .extract()
            .config_context("Failed to extract configuration")
    }

    /// Configuration file this loader reads
    ///
    /// The explicit path when one was set, whether or not it exists;
    /// otherwise the first existing default location.
    pub fn resolve_config_file(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Render a configuration as TOML
    pub fn render_toml(config: &AppConfig) -> Result<String> {
        toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_procfs_config(config)?;
    validate_battery_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if config.server.ip_addr().is_none() {
        return Err(Error::configuration(format!(
            "Server host must be an IP address, got {:?}",
            config.server.host
        )));
    }
    Ok(())
}

fn validate_procfs_config(config: &AppConfig) -> Result<()> {
    if config.procfs.stat_path.as_os_str().is_empty() {
        return Err(Error::configuration("procfs.stat_path cannot be empty"));
    }
    if config.procfs.loadavg_path.as_os_str().is_empty() {
        return Err(Error::configuration("procfs.loadavg_path cannot be empty"));
    }
    Ok(())
}

fn validate_battery_config(config: &AppConfig) -> Result<()> {
    if config.battery.command.trim().is_empty() {
        return Err(Error::configuration("battery.command cannot be empty"));
    }
    if config.battery.timeout_secs == 0 {
        return Err(Error::configuration("battery.timeout_secs cannot be 0"));
    }
    Ok(())
}
