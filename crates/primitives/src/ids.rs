use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ParseError;

/// Length in bytes of a [`ResourceId`].
pub const RESOURCE_ID_LEN: usize = 32;

/// Numeric identifier of a domain as the bridge contracts know it (`uint8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(u8);

impl DomainId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for DomainId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<DomainId> for u8 {
    fn from(value: DomainId) -> Self {
        value.0
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Identifier of a transferable resource, shared by every domain that routes it.
///
/// Rendered and parsed as `0x`-prefixed hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId([u8; RESOURCE_ID_LEN]);

impl ResourceId {
    pub const fn new(bytes: [u8; RESOURCE_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn zero() -> Self {
        Self([0; RESOURCE_ID_LEN])
    }

    pub fn as_bytes(&self) -> &[u8; RESOURCE_ID_LEN] {
        &self.0
    }
}

impl From<[u8; RESOURCE_ID_LEN]> for ResourceId {
    fn from(value: [u8; RESOURCE_ID_LEN]) -> Self {
        Self(value)
    }
}

impl From<ResourceId> for [u8; RESOURCE_ID_LEN] {
    fn from(value: ResourceId) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for ResourceId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for ResourceId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        let actual = bytes.len();
        let buf: [u8; RESOURCE_ID_LEN] =
            bytes.try_into().map_err(|_| ParseError::InvalidLength {
                expected: RESOURCE_ID_LEN,
                actual,
            })?;
        Ok(Self(buf))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({self})")
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_resource_id_parse_with_and_without_prefix() {
        let hex = "0000000000000000000000000000000000000000000000000000000000000300";
        let a: ResourceId = format!("0x{hex}").parse().unwrap();
        let b: ResourceId = hex.parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_bytes()[30], 3);
        assert_eq!(a.to_string(), format!("0x{hex}"));
    }

    #[test]
    fn test_resource_id_rejects_wrong_length() {
        let err = "0x0102".parse::<ResourceId>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn test_resource_id_rejects_non_hex() {
        assert!(matches!(
            "0xzz".parse::<ResourceId>(),
            Err(ParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_resource_id_serde_as_hex_string() {
        let id = ResourceId::new([0xab; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(32)));
        let back: ResourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    proptest! {
        #[test]
        fn proptest_resource_id_display_parses_back(bytes in any::<[u8; 32]>()) {
            let id = ResourceId::new(bytes);
            prop_assert_eq!(id.to_string().parse::<ResourceId>().unwrap(), id);
        }
    }
}
