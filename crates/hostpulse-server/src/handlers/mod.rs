//! Request handlers

pub mod metrics;

pub use metrics::metrics_routes;
