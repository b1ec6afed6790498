//! [`FeeHandlerClient`] backed by the bridge's fee contracts on an EVM chain.

use alloy::{
    contract::Error as ContractError,
    primitives::{Address, Bytes, FixedBytes, U256},
    providers::Provider,
    sol,
};
use async_trait::async_trait;
use xchain_primitives::{DomainId, ResourceId};

use crate::client::{ChainQueryError, FeeHandlerClient, FeeRequest, PercentageFeeParams, RawFee};

sol! {
    #[sol(rpc)]
    interface FeeHandlerRouter {
        function _domainResourceIDToFeeHandlerAddress(uint8 destinationDomainID, bytes32 resourceID) external view returns (address);
    }

    #[sol(rpc)]
    interface FeeHandler {
        function calculateFee(
            address sender,
            uint8 fromDomainID,
            uint8 destinationDomainID,
            bytes32 resourceID,
            bytes depositData,
            bytes feeData
        ) external view returns (uint256 fee, address tokenAddress);
    }

    #[sol(rpc)]
    interface PercentageERC20FeeHandler {
        function HUNDRED_PERCENT() external view returns (uint32);
        function _resourceIDToFeeBounds(bytes32 resourceID) external view returns (uint128 lowerBound, uint128 upperBound);
        function _domainResourceIDToFee(uint8 destinationDomainID, bytes32 resourceID) external view returns (uint32);
    }
}

pub(crate) fn parse_address(value: &str) -> Result<Address, ChainQueryError> {
    value
        .parse::<Address>()
        .map_err(|_| ChainQueryError::InvalidAddress(value.to_owned()))
}

fn resource_word(resource_id: ResourceId) -> FixedBytes<32> {
    FixedBytes::from(*resource_id.as_bytes())
}

/// The router reports unset routes as the zero address.
fn routed_handler(address: Address) -> Option<String> {
    (!address.is_zero()).then(|| address.to_string())
}

/// The zero token address denotes the native currency.
fn fee_token(address: Address) -> Option<String> {
    (!address.is_zero()).then(|| address.to_string())
}

fn to_u128(value: U256, what: &'static str) -> Result<u128, ChainQueryError> {
    value.try_into().map_err(|_| ChainQueryError::Overflow(what))
}

fn call_err(err: ContractError) -> ChainQueryError {
    ChainQueryError::Call(err.to_string())
}

/// Queries fee contracts through an alloy provider.
#[derive(Debug, Clone)]
pub struct EvmFeeClient<P> {
    provider: P,
}

impl<P> EvmFeeClient<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider + Clone> FeeHandlerClient for EvmFeeClient<P> {
    async fn route_fee_handler(
        &self,
        fee_router: &str,
        destination: DomainId,
        resource_id: ResourceId,
    ) -> Result<Option<String>, ChainQueryError> {
        let router = FeeHandlerRouter::new(parse_address(fee_router)?, self.provider.clone());
        let handler = router
            ._domainResourceIDToFeeHandlerAddress(destination.get(), resource_word(resource_id))
            .call()
            .await
            .map_err(call_err)?;
        Ok(routed_handler(handler))
    }

    async fn calculate_fee(
        &self,
        handler: &str,
        request: &FeeRequest,
    ) -> Result<RawFee, ChainQueryError> {
        let contract = FeeHandler::new(parse_address(handler)?, self.provider.clone());
        let ret = contract
            .calculateFee(
                parse_address(&request.sender)?,
                request.source.get(),
                request.destination.get(),
                resource_word(request.resource_id),
                Bytes::from(request.deposit_data.clone()),
                Bytes::from(request.fee_data.clone()),
            )
            .call()
            .await
            .map_err(call_err)?;

        Ok(RawFee {
            amount: to_u128(ret.fee, "calculateFee")?,
            token_address: fee_token(ret.tokenAddress),
        })
    }

    async fn percentage_fee_params(
        &self,
        handler: &str,
        destination: DomainId,
        resource_id: ResourceId,
    ) -> Result<PercentageFeeParams, ChainQueryError> {
        let contract =
            PercentageERC20FeeHandler::new(parse_address(handler)?, self.provider.clone());
        let resource = resource_word(resource_id);

        let hundred_percent = contract.HUNDRED_PERCENT().call().await.map_err(call_err)?;
        let fee_percentage = contract
            ._domainResourceIDToFee(destination.get(), resource)
            .call()
            .await
            .map_err(call_err)?;
        let bounds = contract
            ._resourceIDToFeeBounds(resource)
            .call()
            .await
            .map_err(call_err)?;

        Ok(PercentageFeeParams {
            fee_percentage,
            hundred_percent,
            lower_bound: bounds.lowerBound,
            upper_bound: bounds.upperBound,
        })
    }
}
