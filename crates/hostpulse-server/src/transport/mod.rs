//! Transport layer
//!
//! HTTP serving of the telemetry endpoint via Rocket.

pub mod http;

pub use http::{Cors, HttpTransport, HttpTransportConfig};
