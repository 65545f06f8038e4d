//! # HostPulse Server
//!
//! HTTP surface for host telemetry. One route, `/metrics`:
//!
//! | Method | Response |
//! |--------|----------|
//! | `GET` | `200` with the JSON [`TelemetryReport`](hostpulse_domain::TelemetryReport) |
//! | `OPTIONS` | `204`, empty body (CORS pre-flight) |
//!
//! Every response carries permissive CORS headers so a browser dashboard on
//! another origin can poll the endpoint.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hostpulse_server::{ServerOverrides, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config search paths + HOSTPULSE_* environment
//!     run(None, ServerOverrides::default()).await
//! }
//! ```

pub mod constants;
pub mod handlers;
pub mod init;
pub mod transport;

pub use init::{ServerOverrides, render_effective_config, run};
pub use transport::http::{HttpTransport, HttpTransportConfig};
