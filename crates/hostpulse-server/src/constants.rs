//! Server constants

// ============================================================================
// CORS CONSTANTS
// ============================================================================

/// Origins allowed to read responses
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Methods accepted from cross-origin callers
pub const CORS_ALLOW_METHODS: &str = "GET, OPTIONS";

/// Request headers accepted from cross-origin callers
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";
