//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for HostPulse
///
/// Measurement variants are recoverable at the endpoint boundary: each one
/// degrades a single field of the report instead of failing the request.
#[derive(Error, Debug)]
pub enum Error {
    /// A kernel interface could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path of the interface that failed
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Contents were malformed or carried too few fields
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the malformed input
        message: String,
    },

    /// The total tick delta between two snapshots was not positive
    #[error("Non-positive CPU tick delta between samples: {total_delta}")]
    InvalidDelta {
        /// Observed `sum(later) - sum(earlier)`
        total_delta: i128,
    },

    /// The external battery helper failed to run or exited unsuccessfully
    #[error("Battery helper `{command}` failed: {message}")]
    HelperInvocation {
        /// Command that was invoked
        command: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Measurement error creation methods
impl Error {
    /// Create a read error for a kernel interface path
    pub fn read<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an invalid delta error
    pub fn invalid_delta(total_delta: i128) -> Self {
        Self::InvalidDelta { total_delta }
    }
}

// Helper error creation methods
impl Error {
    /// Create a battery helper invocation error
    pub fn helper_invocation<C: Into<String>, S: Into<String>>(command: C, message: S) -> Self {
        Self::HelperInvocation {
            command: command.into(),
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error came from reading or interpreting kernel counters
    pub fn is_measurement_error(&self) -> bool {
        matches!(
            self,
            Self::Read { .. } | Self::Parse { .. } | Self::InvalidDelta { .. }
        )
    }
}
