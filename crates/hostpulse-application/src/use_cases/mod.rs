//! Use cases

pub mod fallback;
pub mod sampler;
pub mod telemetry_service;

pub use fallback::CpuFallbackSelector;
pub use sampler::UtilizationSampler;
pub use telemetry_service::TelemetryService;
