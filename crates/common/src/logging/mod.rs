//! Logging subsystem.

mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::{init, try_init, LoggingError};
pub use types::{FileLoggingConfig, LoggerConfig, StdoutConfig};

pub use tracing_appender::rolling::Rotation;
