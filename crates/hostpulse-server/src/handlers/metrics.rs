//! `/metrics` handlers
//!
//! `GET` always answers 200: unavailable sub-metrics are omitted or replaced
//! by a note or error object inside the body.

use hostpulse_application::TelemetryService;
use hostpulse_domain::TelemetryReport;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Route, State, get, head, options, routes};
use tracing::debug;

/// Collect and serve a fresh telemetry report
#[get("/metrics")]
pub async fn get_metrics(service: &State<TelemetryService>) -> Json<TelemetryReport> {
    let report = service.collect().await;
    debug!(
        degraded = report.note.is_some(),
        battery_available = report.battery.is_available(),
        "Served /metrics"
    );
    Json(report)
}

/// CORS pre-flight
#[options("/metrics")]
pub fn preflight_metrics() -> Status {
    Status::NoContent
}

/// `HEAD` is not served
///
/// Declared so Rocket does not answer `HEAD` through the `GET` handler,
/// which would sample the CPU and run the battery helper.
#[head("/metrics")]
pub fn head_metrics() -> Status {
    Status::MethodNotAllowed
}

/// Route table for the telemetry endpoint
pub fn metrics_routes() -> Vec<Route> {
    routes![get_metrics, preflight_metrics, head_metrics]
}
