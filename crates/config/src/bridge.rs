use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;
use xchain_primitives::Domain;

use crate::errors::ConfigError;

/// The shared configuration document describing every domain and resource of one
/// bridge environment.
///
/// Fetching the document is left to the caller; this type only parses and
/// sanity-checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub domains: Vec<Domain>,
}

impl BridgeConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), domains = config.domains.len(), "loaded bridge config");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for domain in &self.domains {
            if !seen.insert(domain.id) {
                return Err(ConfigError::DuplicateDomain(domain.id.get()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use xchain_primitives::{DomainId, Network};

    use super::*;

    const TWO_DOMAINS: &str = r#"{
        "domains": [
            { "id": 1, "type": "evm", "caipId": "eip155:11155111", "resources": [] },
            { "id": 3, "type": "btc", "caipId": "bip122:000000000933ea01ad0ee984209779ba" }
        ]
    }"#;

    #[test]
    fn test_parse_bridge_config() {
        let config = BridgeConfig::from_json_str(TWO_DOMAINS).unwrap();
        assert_eq!(config.domains.len(), 2);
        assert_eq!(config.domains[1].id, DomainId::new(3));
        assert_eq!(config.domains[1].network, Network::Bitcoin);
        assert!(config.domains[1].resources.is_empty());
    }

    #[test]
    fn test_duplicate_domain_rejected() {
        let json = r#"{
            "domains": [
                { "id": 1, "type": "evm", "caipId": "eip155:1" },
                { "id": 1, "type": "substrate", "caipId": "polkadot:abc" }
            ]
        }"#;
        assert!(matches!(
            BridgeConfig::from_json_str(json),
            Err(ConfigError::DuplicateDomain(1))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_DOMAINS.as_bytes()).unwrap();

        let config = BridgeConfig::load(file.path()).unwrap();
        assert_eq!(config.domains[0].caip_id, "eip155:11155111");
    }

    #[test]
    fn test_load_missing_file() {
        let err = BridgeConfig::load("/nonexistent/bridge.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
