use async_trait::async_trait;
use thiserror::Error;
use xchain_primitives::{DomainId, ResourceId};

/// Errors reported by a chain-query handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainQueryError {
    #[error("chain call failed: {0}")]
    Call(String),

    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    #[error("value returned by {0} does not fit in 128 bits")]
    Overflow(&'static str),
}

/// Arguments of a fee handler's `calculateFee` view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeRequest {
    pub sender: String,
    pub source: DomainId,
    pub destination: DomainId,
    pub resource_id: ResourceId,
    pub deposit_data: Vec<u8>,
    pub fee_data: Vec<u8>,
}

/// Fee amount as reported by a handler, before any post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFee {
    pub amount: u128,
    /// Token the fee is charged in; `None` for the native currency.
    pub token_address: Option<String>,
}

/// Configuration of a percentage fee handler for one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageFeeParams {
    /// Rate numerator, to be divided by `hundred_percent`.
    pub fee_percentage: u32,
    pub hundred_percent: u32,
    pub lower_bound: u128,
    pub upper_bound: u128,
}

/// Read-only access to the fee contracts (EVM) or pallets (Substrate) of one domain.
///
/// Handler and router "addresses" are strings so that both contract addresses
/// and pallet names fit.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait FeeHandlerClient: Send + Sync {
    /// Fee handler the router assigns to `(destination, resource_id)`.
    ///
    /// Returns `None` when the router reports the zero address.
    async fn route_fee_handler(
        &self,
        fee_router: &str,
        destination: DomainId,
        resource_id: ResourceId,
    ) -> Result<Option<String>, ChainQueryError>;

    async fn calculate_fee(
        &self,
        handler: &str,
        request: &FeeRequest,
    ) -> Result<RawFee, ChainQueryError>;

    async fn percentage_fee_params(
        &self,
        handler: &str,
        destination: DomainId,
        resource_id: ResourceId,
    ) -> Result<PercentageFeeParams, ChainQueryError>;
}
