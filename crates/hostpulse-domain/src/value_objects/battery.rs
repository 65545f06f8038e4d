//! Battery state reported by the external helper

use serde::Serialize;
use serde_json::{Map, Value};

/// Battery section of the report
///
/// The helper's JSON object is passed through untouched. When the helper
/// cannot be run, a failure object with a remediation hint takes its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatteryReading {
    /// Parsed helper output
    Status(Map<String, Value>),
    /// Helper could not be invoked
    Unavailable {
        /// Failure reason
        error: String,
        /// Remediation text for the operator
        hint: String,
        /// Command that was attempted
        #[serde(rename = "commandUsed")]
        command_used: String,
    },
}

impl BatteryReading {
    /// Interpret helper stdout.
    ///
    /// Returns `None` when the output is not a JSON object; callers degrade
    /// that to an empty status.
    pub fn from_helper_output(stdout: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<Value>(stdout) {
            Ok(Value::Object(map)) => Some(Self::Status(map)),
            _ => None,
        }
    }

    /// Status with no fields
    pub fn empty() -> Self {
        Self::Status(Map::new())
    }

    /// Failure object
    pub fn unavailable(
        error: impl Into<String>,
        hint: impl Into<String>,
        command_used: impl Into<String>,
    ) -> Self {
        Self::Unavailable {
            error: error.into(),
            hint: hint.into(),
            command_used: command_used.into(),
        }
    }

    /// Whether the helper output was obtained
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}
