//! Configuration types for the logging subsystem.

use std::path::PathBuf;

use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::format::FmtSpan;
use xchain_config::LoggingSettings;

/// Configuration for the stdout logging layer
#[derive(Debug, Clone)]
pub struct StdoutConfig {
    /// Use JSON format instead of compact format
    pub json_format: bool,
    /// Span events to log (ENTER, EXIT, CLOSE, etc.)
    pub fmt_span: FmtSpan,
}

impl Default for StdoutConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            fmt_span: FmtSpan::NONE,
        }
    }
}

/// Configuration for file-based logging with rotation
#[derive(Debug, Clone)]
pub struct FileLoggingConfig {
    /// Directory where log files will be written
    pub directory: PathBuf,
    /// Base filename prefix (e.g., "xchain" -> "xchain.2026-01-01")
    pub file_name_prefix: String,
    pub rotation: Rotation,
    pub json_format: bool,
}

impl FileLoggingConfig {
    pub fn new(directory: PathBuf, file_name_prefix: String) -> Self {
        Self {
            directory,
            file_name_prefix,
            rotation: Rotation::DAILY,
            json_format: false,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_json_format(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }
}

/// Main logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub service_name: String,
    pub stdout_config: StdoutConfig,
    pub file_logging_config: Option<FileLoggingConfig>,
}

impl LoggerConfig {
    pub fn new(service_name: String) -> Self {
        Self {
            service_name,
            stdout_config: StdoutConfig::default(),
            file_logging_config: None,
        }
    }

    /// Builds a logger config from the `[logging]` section of the client settings.
    pub fn from_settings(service_name: String, settings: &LoggingSettings) -> Self {
        let mut config = Self::new(service_name).with_json_logging(settings.json);
        if let Some(dir) = &settings.log_dir {
            config = config.with_file_logging(
                FileLoggingConfig::new(dir.clone(), settings.log_file_prefix.clone())
                    .with_json_format(settings.json),
            );
        }
        config
    }

    pub fn with_json_logging(mut self, enabled: bool) -> Self {
        self.stdout_config.json_format = enabled;
        self
    }

    pub fn with_file_logging(mut self, config: FileLoggingConfig) -> Self {
        self.file_logging_config = Some(config);
        self
    }

    /// Configure which span events to log
    pub fn with_fmt_span(mut self, fmt_span: FmtSpan) -> Self {
        self.stdout_config.fmt_span = fmt_span;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new("xchain-client".to_string())
    }
}
