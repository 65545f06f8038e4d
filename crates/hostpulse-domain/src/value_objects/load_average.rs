//! Kernel load average

use crate::error::{Error, Result};
use serde::Serialize;

/// One-minute load average read from the kernel
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct LoadAverage(f64);

impl LoadAverage {
    /// Parse the load-average file.
    ///
    /// Format: `0.45 0.52 0.48 2/512 12345`. Only the first field is used.
    pub fn parse(content: &str) -> Result<Self> {
        let first = content
            .split_whitespace()
            .next()
            .ok_or_else(|| Error::parse("load average file is empty"))?;
        let value: f64 = first
            .parse()
            .map_err(|_| Error::parse(format!("invalid 1min load: {first}")))?;
        if !value.is_finite() || value < 0.0 {
            return Err(Error::parse(format!("invalid 1min load: {first}")));
        }
        Ok(Self(value))
    }

    /// One-minute value
    pub fn one_minute(self) -> f64 {
        self.0
    }
}
