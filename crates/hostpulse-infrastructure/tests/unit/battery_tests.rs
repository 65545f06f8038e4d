//! Unit tests for the battery helper process

use hostpulse_application::ports::BatteryProvider;
use hostpulse_domain::{BatteryReading, Error};
use hostpulse_infrastructure::adapters::CommandBatteryProvider;
use hostpulse_infrastructure::config::BatteryConfig;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn provider(command: impl Into<String>) -> CommandBatteryProvider {
    CommandBatteryProvider::new(command, Duration::from_secs(5), "install the helper")
}

fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[tokio::test]
async fn test_helper_scripts() {
    let dir = TempDir::new().unwrap();

    // JSON object output is passed through
    let ok = write_script(
        &dir,
        "ok.sh",
        r#"echo '{"percentage": 42, "status": "CHARGING"}'"#,
    );
    let reading = provider(ok.display().to_string()).query().await.unwrap();
    match reading {
        BatteryReading::Status(map) => {
            assert_eq!(map["percentage"], 42);
            assert_eq!(map["status"], "CHARGING");
        }
        other => panic!("expected status, got {other:?}"),
    }

    // Non-zero exit carries stderr
    let failing = write_script(&dir, "fail.sh", "echo 'API not installed' >&2\nexit 3");
    match provider(failing.display().to_string()).query().await.unwrap_err() {
        Error::HelperInvocation { message, .. } => {
            assert!(message.contains('3'), "{message}");
            assert!(message.contains("API not installed"), "{message}");
        }
        other => panic!("expected helper error, got {other:?}"),
    }

    // Slow helper is killed at the timeout
    let slow = write_script(&dir, "slow.sh", "sleep 5");
    let err = CommandBatteryProvider::new(
        slow.display().to_string(),
        Duration::from_millis(200),
        "hint",
    )
    .query()
    .await
    .unwrap_err();
    match err {
        Error::HelperInvocation { message, .. } => assert!(message.contains("timed out")),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_binary_is_invocation_error() {
    let err = provider("hostpulse-no-such-battery-helper")
        .query()
        .await
        .unwrap_err();

    match err {
        Error::HelperInvocation { command, .. } => {
            assert_eq!(command, "hostpulse-no-such-battery-helper");
        }
        other => panic!("expected helper error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_zero_exit_is_invocation_error() {
    let err = provider("false").query().await.unwrap_err();
    assert!(matches!(err, Error::HelperInvocation { .. }));
}

#[tokio::test]
async fn test_non_json_output_degrades_to_empty_object() {
    // `true` succeeds with no output
    let reading = provider("true").query().await.unwrap();
    assert_eq!(reading, BatteryReading::empty());
}

#[test]
fn test_from_config_exposes_command_and_hint() {
    let config = BatteryConfig::default();
    let provider = CommandBatteryProvider::from_config(&config);
    assert_eq!(provider.command(), "termux-battery-status");
    assert!(provider.remediation_hint().contains("termux-api"));
}
