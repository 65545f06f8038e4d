//! Tests for configuration handling at startup

use hostpulse_server::{HttpTransportConfig, ServerOverrides, render_effective_config};
use hostpulse_infrastructure::config::ServerConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_overrides_apply_on_top_of_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hostpulse.toml");
    fs::write(&path, "[server]\nport = 9000\nhost = \"127.0.0.1\"\n").unwrap();

    let overrides = ServerOverrides {
        host: None,
        port: Some(9100),
    };
    let rendered = render_effective_config(Some(&path), &overrides).unwrap();

    assert!(rendered.contains("port = 9100"), "{rendered}");
    assert!(rendered.contains("host = \"127.0.0.1\""), "{rendered}");
}

#[test]
fn test_override_repairs_invalid_file_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hostpulse.toml");
    fs::write(&path, "[server]\nport = 0\n").unwrap();

    let overrides = ServerOverrides {
        host: None,
        port: Some(9000),
    };
    let rendered = render_effective_config(Some(&path), &overrides).unwrap();

    assert!(rendered.contains("port = 9000"), "{rendered}");
    assert!(render_effective_config(Some(&path), &ServerOverrides::default()).is_err());
}

#[test]
fn test_invalid_override_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let overrides = ServerOverrides {
        host: Some("not-an-ip".to_string()),
        port: None,
    };

    assert!(render_effective_config(Some(&path), &overrides).is_err());
}

#[test]
fn test_transport_binds_all_interfaces_by_default() {
    let config = HttpTransportConfig::from_server_config(&ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8787");
    let rocket_config = config.rocket_config();
    assert_eq!(rocket_config.port, 8787);
}
