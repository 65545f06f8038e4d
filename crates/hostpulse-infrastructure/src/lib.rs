//! # Infrastructure Layer
//!
//! Technical concerns behind the application ports.
//!
//! ## Module Categories
//!
//! ### Adapters
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | procfs counter and load-average readers, battery helper process, processor count |
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`bootstrap`] | Builds the telemetry service from configuration |
//! | [`constants`] | Deployment defaults |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::build_telemetry_service;
pub use config::{AppConfig, ConfigLoader};
