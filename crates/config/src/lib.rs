//! Configuration documents consumed by the bridge client.

mod bridge;
mod errors;
mod settings;

pub use bridge::BridgeConfig;
pub use errors::ConfigError;
pub use settings::{ClientSettings, Environment, LoggingSettings};
