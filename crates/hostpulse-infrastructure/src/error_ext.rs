//! Error extension utilities
//!
//! Context extension methods that convert library errors into domain errors.

use hostpulse_domain::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Extension trait for adding configuration context to errors
///
/// # Example
///
/// ```ignore
/// use hostpulse_infrastructure::error_ext::ErrorContext;
///
/// let config: AppConfig = figment
///     .extract()
///     .config_context("Failed to extract configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }
}

/// Extension trait attaching the kernel interface path to I/O failures
pub trait ReadContext<T> {
    /// Map an I/O error into `Error::Read` for `path`
    fn read_context(self, path: &Path) -> Result<T>;
}

impl<T> ReadContext<T> for std::io::Result<T> {
    fn read_context(self, path: &Path) -> Result<T> {
        self.map_err(|err| Error::read(path.display().to_string(), err))
    }
}
