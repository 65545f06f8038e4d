//! HostPulse - host telemetry over HTTP
//!
//! Serves CPU utilization, load average fallback, processor count and battery
//! state as JSON on `GET /metrics`.

use clap::Parser;
use hostpulse_server::{ServerOverrides, render_effective_config, run};

/// Command line interface for HostPulse
#[derive(Parser, Debug)]
#[command(name = "hostpulse")]
#[command(about = "HostPulse - instantaneous host telemetry as JSON over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Address to bind to (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let overrides = ServerOverrides {
        host: cli.host,
        port: cli.port,
    };

    if cli.print_config {
        print!("{}", render_effective_config(cli.config.as_deref(), &overrides)?);
        return Ok(());
    }

    run(cli.config.as_deref(), overrides).await
}
