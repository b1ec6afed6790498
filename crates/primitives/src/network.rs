use std::fmt;

use serde::{Deserialize, Serialize};

/// Chain family a domain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Evm,
    Substrate,
    #[serde(rename = "btc", alias = "bitcoin")]
    Bitcoin,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Network::Evm => "evm",
            Network::Substrate => "substrate",
            Network::Bitcoin => "btc",
        };
        f.write_str(s)
    }
}

/// Kind of asset a resource represents, which also selects its custody handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    #[serde(rename = "fungible")]
    Fungible,
    #[serde(rename = "nonfungible")]
    NonFungible,
    #[serde(rename = "permissionedGeneric")]
    PermissionedGeneric,
    #[serde(rename = "permissionlessGeneric")]
    PermissionlessGeneric,
}

/// Fee mechanism configured for a (destination, resource) route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeHandlerType {
    Basic,
    Percentage,
    Twap,
    #[serde(other)]
    Undefined,
}

impl fmt::Display for FeeHandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeeHandlerType::Basic => "basic",
            FeeHandlerType::Percentage => "percentage",
            FeeHandlerType::Twap => "twap",
            FeeHandlerType::Undefined => "undefined",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fee_handler_type_is_undefined() {
        let ty: FeeHandlerType = serde_json::from_str("\"dynamic\"").unwrap();
        assert_eq!(ty, FeeHandlerType::Undefined);
        let ty: FeeHandlerType = serde_json::from_str("\"percentage\"").unwrap();
        assert_eq!(ty, FeeHandlerType::Percentage);
    }

    #[test]
    fn test_network_tags() {
        let n: Network = serde_json::from_str("\"btc\"").unwrap();
        assert_eq!(n, Network::Bitcoin);
        let n: Network = serde_json::from_str("\"bitcoin\"").unwrap();
        assert_eq!(n, Network::Bitcoin);
        assert_eq!(serde_json::to_string(&Network::Substrate).unwrap(), "\"substrate\"");
    }

    #[test]
    fn test_resource_type_tags() {
        let ty: ResourceType = serde_json::from_str("\"permissionlessGeneric\"").unwrap();
        assert_eq!(ty, ResourceType::PermissionlessGeneric);
        let ty: ResourceType = serde_json::from_str("\"nonfungible\"").unwrap();
        assert_eq!(ty, ResourceType::NonFungible);
    }
}
