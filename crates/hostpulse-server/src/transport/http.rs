//! HTTP Transport
//!
//! Serves the telemetry endpoint with Rocket. The route table is built once
//! from [`metrics_routes`] when the Rocket instance is assembled and is never
//! modified afterwards.
//!
//! # Example
//!
//! ```text
//! GET /metrics HTTP/1.1
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//! Access-Control-Allow-Origin: *
//!
//! {"cpu_usage_pct":12.5,"cpus":8,"battery":{"percentage":80}}
//! ```

use crate::constants::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};
use crate::handlers::metrics_routes;
use hostpulse_application::TelemetryService;
use hostpulse_infrastructure::config::ServerConfig;
use rocket::config::{Config as RocketConfig, LogLevel};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Build, Request, Response, Rocket};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::info;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self::from_server_config(&ServerConfig::default())
    }
}

impl HttpTransportConfig {
    /// Create config from the server section of the application configuration
    pub fn from_server_config(config: &ServerConfig) -> Self {
        Self {
            host: config
                .ip_addr()
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: config.port,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Get the Rocket configuration
    pub fn rocket_config(&self) -> RocketConfig {
        RocketConfig {
            address: self.host,
            port: self.port,
            log_level: LogLevel::Critical,
            ..RocketConfig::default()
        }
    }
}

/// HTTP transport server
pub struct HttpTransport {
    config: HttpTransportConfig,
    service: TelemetryService,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, service: TelemetryService) -> Self {
        Self { config, service }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        rocket::custom(self.config.rocket_config())
            .manage(self.service.clone())
            .mount("/", metrics_routes())
            .attach(Cors)
    }

    /// Start the HTTP transport server
    ///
    /// Rocket handles graceful shutdown on Ctrl+C.
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            "HTTP transport listening on http://{}/metrics",
            self.config.socket_addr()
        );

        self.rocket()
            .launch()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

        info!("HTTP transport stopped");
        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            CORS_ALLOW_METHODS,
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            CORS_ALLOW_HEADERS,
        ));
    }
}
