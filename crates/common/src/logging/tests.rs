//! Unit tests for the logging subsystem.

use std::path::PathBuf;

use tracing_subscriber::fmt::format::FmtSpan;
use xchain_config::LoggingSettings;

use super::{manager::build_filter, types::*, Rotation};

#[test]
fn test_logger_config_defaults() {
    let config = LoggerConfig::default();
    assert_eq!(config.service_name, "xchain-client");
    assert!(!config.stdout_config.json_format);
    assert!(config.file_logging_config.is_none());
}

#[test]
fn test_logger_config_builders() {
    let config = LoggerConfig::new("fees".to_string())
        .with_json_logging(true)
        .with_fmt_span(FmtSpan::CLOSE)
        .with_file_logging(
            FileLoggingConfig::new(PathBuf::from("/tmp/logs"), "fees".to_string())
                .with_rotation(Rotation::HOURLY)
                .with_json_format(true),
        );

    assert!(config.stdout_config.json_format);
    let file = config.file_logging_config.expect("file logging configured");
    assert_eq!(file.directory, PathBuf::from("/tmp/logs"));
    assert!(file.json_format);
}

#[test]
fn test_logger_config_from_settings_without_dir() {
    let settings = LoggingSettings {
        json: true,
        log_dir: None,
        log_file_prefix: "xchain".to_string(),
    };
    let config = LoggerConfig::from_settings("svc".to_string(), &settings);
    assert!(config.stdout_config.json_format);
    assert!(config.file_logging_config.is_none());
}

#[test]
fn test_logger_config_from_settings_with_dir() {
    let settings = LoggingSettings {
        json: false,
        log_dir: Some(PathBuf::from("/var/log/xchain")),
        log_file_prefix: "bridge".to_string(),
    };
    let config = LoggerConfig::from_settings("svc".to_string(), &settings);
    let file = config.file_logging_config.expect("file logging configured");
    assert_eq!(file.file_name_prefix, "bridge");
    assert!(!file.json_format);
}

#[test]
fn test_default_filter_builds() {
    assert!(build_filter().is_ok());
}
