//! Logging initialization.

use thiserror::Error;
use tracing::{info, Level};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    filter::ParseError,
    fmt::layer,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

use super::types::LoggerConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter directive: {0}")]
    Filter(#[from] ParseError),

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Builds the default filter: INFO, overridable through `RUST_LOG`.
///
/// Chain RPC transports are noisy at DEBUG, so they are capped at WARN unless
/// `RUST_LOG` says otherwise.
pub(crate) fn build_filter() -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
        .add_directive("hyper=warn".parse()?)
        .add_directive("alloy_transport_http=warn".parse()?))
}

/// Installs the global subscriber described by `config`.
pub fn try_init(config: LoggerConfig) -> Result<(), LoggingError> {
    let filt = build_filter()?;

    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    } else {
        layer()
            .compact()
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    };

    let file_layer = config.file_logging_config.as_ref().map(|file_config| {
        let file_appender = RollingFileAppender::new(
            file_config.rotation.clone(),
            &file_config.directory,
            &file_config.file_name_prefix,
        );

        if file_config.json_format {
            layer()
                .json()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(filt.clone())
                .boxed()
        } else {
            layer()
                .compact()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(filt.clone())
                .boxed()
        }
    });

    tracing_subscriber::registry()
        .with(stdout_sub)
        .with(file_layer)
        .try_init()?;

    info!(service_name = %config.service_name, "logging initialized");
    Ok(())
}

/// Like [`try_init`], but reports failure on stderr instead of returning it.
pub fn init(config: LoggerConfig) {
    if let Err(e) = try_init(config) {
        eprintln!("failed to initialize logging: {e}");
    }
}
