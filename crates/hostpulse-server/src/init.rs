//! Server Initialization
//!
//! Loads configuration, installs logging, wires the telemetry service and
//! launches the HTTP transport.
//!
//! # Configuration
//!
//! Sources, later overriding earlier:
//! - Built-in defaults
//! - Config file: `--config <PATH>` or `hostpulse.toml` in the default locations
//! - Environment variables: `HOSTPULSE_SERVER__PORT=9000`
//! - Command line flags (`--host`, `--port`)

use std::path::Path;

use hostpulse_infrastructure::config::loader::validate_app_config;
use hostpulse_infrastructure::config::{AppConfig, ConfigLoader};
use hostpulse_infrastructure::{build_telemetry_service, logging};
use tracing::info;

use crate::transport::http::{HttpTransport, HttpTransportConfig};

/// Command line overrides applied on top of the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    /// Bind address override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
}

impl ServerOverrides {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Run the HostPulse server
///
/// Serves until Rocket receives a shutdown signal. Only configuration and
/// bind failures end the process; measurement failures never do.
pub async fn run(
    config_path: Option<&Path>,
    overrides: ServerOverrides,
) -> Result<(), Box<dyn std::error::Error>> {
    let loader = config_loader(config_path);
    let config = load_config(&loader, &overrides)?;
    logging::init_logging(&config.logging)?;
    if let Some(path) = loader.resolve_config_file() {
        logging::log_config_loaded(&path, path.exists());
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        version = env!("CARGO_PKG_VERSION"),
        "Starting HostPulse server"
    );

    let service = build_telemetry_service(&config);
    let transport = HttpTransport::new(
        HttpTransportConfig::from_server_config(&config.server),
        service,
    );

    transport
        .start()
        .await
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}

/// Render the effective configuration as TOML
pub fn render_effective_config(
    config_path: Option<&Path>,
    overrides: &ServerOverrides,
) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(&config_loader(config_path), overrides)?;
    Ok(ConfigLoader::render_toml(&config)?)
}

fn config_loader(config_path: Option<&Path>) -> ConfigLoader {
    match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Merge configuration sources, apply overrides, then validate the result
fn load_config(
    loader: &ConfigLoader,
    overrides: &ServerOverrides,
) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = loader.load_unvalidated()?;
    overrides.apply(&mut config);
    validate_app_config(&config)?;
    Ok(config)
}
