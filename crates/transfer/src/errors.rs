use thiserror::Error;
use xchain_btc::BuildError;
use xchain_fees::{ChainQueryError, FeeError};
use xchain_primitives::{DomainId, Network, ResourceId, ResourceType};
use xchain_registry::RegistryError;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Fee(#[from] FeeError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("resource {resource} is {actual:?}, expected {expected:?}")]
    UnsupportedResourceType {
        resource: ResourceId,
        expected: ResourceType,
        actual: ResourceType,
    },

    #[error("domain {domain} is {actual}, expected {expected}")]
    NetworkMismatch {
        domain: DomainId,
        expected: Network,
        actual: Network,
    },

    #[error("invalid {network} address {address:?}")]
    InvalidAddress { address: String, network: Network },

    #[error("resource {resource} on domain {domain} has no {field}")]
    MissingResourceField {
        domain: DomainId,
        resource: ResourceId,
        field: &'static str,
    },

    #[error("{field} is {len} bytes, limit is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("invalid hex in {field}: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("amount {0} out of range")]
    AmountOutOfRange(u128),
}

#[derive(Debug, Error)]
pub enum LiquidityError {
    /// The destination cannot release the requested amount.
    #[error("insufficient liquidity: {available} available, {requested} requested")]
    Insufficient { available: u128, requested: u128 },

    #[error("resource {resource} on domain {domain} has no liquidity holder")]
    NoHolder { domain: DomainId, resource: ResourceId },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("balance query failed: {0}")]
    Query(#[from] ChainQueryError),
}
