use serde::{Deserialize, Serialize};

use crate::{DomainId, FeeHandlerType, Network, ResourceId, ResourceType};

/// A fee handler deployed on a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeHandlerConfig {
    /// Contract address (EVM) or pallet name (Substrate).
    pub address: String,

    #[serde(rename = "type")]
    pub handler_type: FeeHandlerType,
}

/// Custody handler responsible for one resource type on a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    pub address: String,
}

/// A transferable asset registered on a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub resource_id: ResourceId,

    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// Whether this is the domain's base currency.
    #[serde(default)]
    pub native: bool,

    /// Minted/burned rather than locked/released.
    #[serde(default)]
    pub burnable: bool,

    /// Flat bridge fee advertised for the resource, in its smallest unit.
    ///
    /// Carried for callers to show or budget for. Nothing here charges it:
    /// fees come from the fee handlers, and Bitcoin deposits pay the
    /// size-based network fee computed by the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<u128>,

    /// Token contract (EVM) or deposit address (Bitcoin).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Fee collection address (Bitcoin).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_address: Option<String>,

    #[serde(default, rename = "assetID", skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,

    /// XCM multi-asset descriptor (Substrate), kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xcm_multi_asset_id: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

/// One chain participating in the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: DomainId,

    #[serde(rename = "type")]
    pub network: Network,

    /// CAIP-2 chain identifier, e.g. `eip155:1` or `bip122:000000000019d6689c085ae165831e93`.
    pub caip_id: String,

    #[serde(default)]
    pub name: String,

    /// Bridge contract (EVM) or pallet (Substrate); unused on Bitcoin.
    #[serde(default)]
    pub bridge: String,

    #[serde(default)]
    pub fee_router: String,

    #[serde(default)]
    pub fee_handlers: Vec<FeeHandlerConfig>,

    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,

    #[serde(default)]
    pub native_token_symbol: String,

    #[serde(default)]
    pub native_token_decimals: u8,

    #[serde(default)]
    pub resources: Vec<Resource>,
}
