//! Configuration types module

pub mod app;
pub mod battery;
pub mod logging;
pub mod procfs;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use battery::BatteryConfig;
pub use logging::LoggingConfig;
pub use procfs::ProcfsConfig;
pub use server::ServerConfig;
