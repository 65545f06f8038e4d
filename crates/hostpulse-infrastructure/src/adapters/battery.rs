//! Battery helper process
//!
//! Runs the configured helper with no arguments and hands its stdout to the
//! domain for parsing. Spawn failures, non-zero exits and timeouts are
//! `Error::HelperInvocation`; output that is not a JSON object degrades to an
//! empty status.

use crate::config::BatteryConfig;
use async_trait::async_trait;
use hostpulse_application::ports::BatteryProvider;
use hostpulse_domain::BatteryReading;
use hostpulse_domain::error::{Error, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::warn;

/// Battery provider backed by an external command
#[derive(Debug, Clone)]
pub struct CommandBatteryProvider {
    command: String,
    timeout: Duration,
    hint: String,
}

impl CommandBatteryProvider {
    /// Create a provider running `command`
    pub fn new(command: impl Into<String>, timeout: Duration, hint: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout,
            hint: hint.into(),
        }
    }

    /// Create a provider from configuration
    pub fn from_config(config: &BatteryConfig) -> Self {
        Self::new(config.command.clone(), config.timeout(), config.hint.clone())
    }
}

#[async_trait]
impl BatteryProvider for CommandBatteryProvider {
    async fn query(&self) -> Result<BatteryReading> {
        let child = Command::new(&self.command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| {
                Error::helper_invocation(
                    &self.command,
                    format!("timed out after {}s", self.timeout.as_secs_f64()),
                )
            })?
            .map_err(|e| Error::helper_invocation(&self.command, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {stderr}", output.status)
            };
            return Err(Error::helper_invocation(&self.command, message));
        }

        Ok(
            BatteryReading::from_helper_output(&output.stdout).unwrap_or_else(|| {
                warn!(
                    command = %self.command,
                    "Battery helper output is not a JSON object, reporting empty status"
                );
                BatteryReading::empty()
            }),
        )
    }

    fn command(&self) -> &str {
        &self.command
    }

    fn remediation_hint(&self) -> &str {
        &self.hint
    }
}
