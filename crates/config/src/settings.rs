use std::{fmt, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default gas limit attached to assembled EVM deposit requests.
const DEFAULT_EVM_GAS_LIMIT: u64 = 300_000;

/// Default bridge config document location.
const DEFAULT_BRIDGE_CONFIG_PATH: &str = "bridge-config.json";

/// Default log file prefix.
const DEFAULT_LOG_FILE_PREFIX: &str = "xchain";

/// Bridge deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Devnet,
    #[default]
    Testnet,
    Mainnet,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Environment::Local => "local",
            Environment::Devnet => "devnet",
            Environment::Testnet => "testnet",
            Environment::Mainnet => "mainnet",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Emit JSON instead of compact lines on stdout.
    #[serde(default)]
    pub json: bool,

    /// Also write rolling log files into this directory.
    pub log_dir: Option<PathBuf>,

    #[serde(default = "default_log_file_prefix")]
    pub log_file_prefix: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            json: false,
            log_dir: None,
            log_file_prefix: default_log_file_prefix(),
        }
    }
}

/// Client settings, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    #[serde(default)]
    pub environment: Environment,

    /// Where the bridge config document for `environment` lives.
    #[serde(default = "default_bridge_config_path")]
    pub bridge_config_path: PathBuf,

    #[serde(default = "default_evm_gas_limit")]
    pub evm_gas_limit: u64,

    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_bridge_config_path() -> PathBuf {
    DEFAULT_BRIDGE_CONFIG_PATH.into()
}

fn default_evm_gas_limit() -> u64 {
    DEFAULT_EVM_GAS_LIMIT
}

fn default_log_file_prefix() -> String {
    DEFAULT_LOG_FILE_PREFIX.to_owned()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            bridge_config_path: default_bridge_config_path(),
            evm_gas_limit: default_evm_gas_limit(),
            logging: LoggingSettings::default(),
        }
    }
}

impl ClientSettings {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = ClientSettings::from_toml_str("").unwrap();
        assert_eq!(settings, ClientSettings::default());
        assert_eq!(settings.environment, Environment::Testnet);
        assert_eq!(settings.evm_gas_limit, DEFAULT_EVM_GAS_LIMIT);
    }

    #[test]
    fn test_settings_from_toml() {
        let config = r#"
            environment = "mainnet"
            bridge_config_path = "/etc/xchain/mainnet.json"
            evm_gas_limit = 500000

            [logging]
            json = true
            log_dir = "/var/log/xchain"
        "#;

        let settings = ClientSettings::from_toml_str(config).unwrap();
        assert_eq!(settings.environment, Environment::Mainnet);
        assert_eq!(settings.evm_gas_limit, 500_000);
        assert!(settings.logging.json);
        assert_eq!(settings.logging.log_file_prefix, DEFAULT_LOG_FILE_PREFIX);
        assert_eq!(
            settings.bridge_config_path,
            PathBuf::from("/etc/xchain/mainnet.json")
        );
    }

    #[test]
    fn test_settings_serde_roundtrip() {
        let settings = ClientSettings {
            environment: Environment::Devnet,
            ..Default::default()
        };
        let serialized = toml::to_string(&settings).unwrap();
        let reparsed = ClientSettings::from_toml_str(&serialized).unwrap();
        assert_eq!(settings, reparsed);
    }

    #[test]
    fn test_unknown_environment_rejected() {
        assert!(ClientSettings::from_toml_str("environment = \"staging\"").is_err());
    }
}
