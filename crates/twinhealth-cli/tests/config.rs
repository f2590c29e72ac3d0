use std::path::PathBuf;
use std::time::Duration;

use pretty_assertions::assert_eq;
use twinhealth_cli::config::{TwinHealthConfig, load_config, save_config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, TwinHealthConfig::default());
    assert_eq!(config.latency(), Duration::ZERO);
    assert_eq!(config.output_dir(), PathBuf::from("."));
}

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = TwinHealthConfig {
        simulated_latency_ms: 2000,
        clinician_name: Some("Dr. Okafor".to_string()),
        ..Default::default()
    };
    config.styles.accent_color = "1B5E20".to_string();
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.latency(), Duration::from_secs(2));
    assert!(!path.with_extension("json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &TwinHealthConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "output_dir": "/tmp/reports" }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.output_dir(), PathBuf::from("/tmp/reports"));
    assert_eq!(config.styles.body_font, TwinHealthConfig::default().styles.body_font);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 9 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than supported"));
}

#[test]
fn version_beyond_u32_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 4294967297 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than supported"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("is not valid JSON"));
}
