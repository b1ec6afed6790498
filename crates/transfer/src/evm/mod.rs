//! Unsigned EVM transactions for bridge deposits.

mod deposit_data;

use alloy::{
    primitives::{Address, Bytes, FixedBytes, TxKind, U256},
    rpc::types::{TransactionInput, TransactionRequest},
    sol,
    sol_types::SolCall,
};
use tracing::{debug, info};
use xchain_fees::{Fee, FeeHandlerClient, FeeResolver, FeeRoute};
use xchain_primitives::{DomainId, Network, Resource, ResourceId, ResourceType};
use xchain_registry::Registry;

pub use self::deposit_data::{
    fungible_deposit_data, permissionless_generic_deposit_data, recipient_bytes,
};
use crate::{
    errors::TransferError,
    types::{ensure_network, FungibleTransfer, GenericTransfer},
};

sol! {
    interface Bridge {
        function deposit(
            uint8 destinationDomainID,
            bytes32 resourceID,
            bytes depositData,
            bytes feeData
        ) external payable returns (uint64 depositNonce, bytes handlerResponse);
    }

    interface ERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

/// Transactions the sender signs and submits, in order.
#[derive(Debug, Clone)]
pub struct EvmDeposit {
    pub fee: Fee,
    /// ERC-20 approvals that must be mined before the deposit.
    pub approvals: Vec<TransactionRequest>,
    pub deposit: TransactionRequest,
}

fn parse_address(address: &str) -> Result<Address, TransferError> {
    address
        .parse::<Address>()
        .map_err(|_| TransferError::InvalidAddress {
            address: address.to_owned(),
            network: Network::Evm,
        })
}

fn call_request(to: Address, value: U256, input: Vec<u8>, gas_limit: Option<u64>) -> TransactionRequest {
    TransactionRequest {
        to: Some(TxKind::Call(to)),
        value: Some(value),
        input: TransactionInput::new(Bytes::from(input)),
        gas: gas_limit,
        ..Default::default()
    }
}

/// `Bridge.deposit` call paying `value` in the native currency.
pub fn deposit_request(
    bridge: &str,
    destination: DomainId,
    resource_id: ResourceId,
    deposit_data: Vec<u8>,
    value: U256,
    gas_limit: Option<u64>,
) -> Result<TransactionRequest, TransferError> {
    let call = Bridge::depositCall {
        destinationDomainID: destination.get(),
        resourceID: FixedBytes::from(*resource_id.as_bytes()),
        depositData: Bytes::from(deposit_data),
        feeData: Bytes::new(),
    };
    Ok(call_request(
        parse_address(bridge)?,
        value,
        call.abi_encode(),
        gas_limit,
    ))
}

/// `ERC20.approve(spender, amount)` on `token`.
pub fn approval_request(
    token: &str,
    spender: &str,
    amount: u128,
    gas_limit: Option<u64>,
) -> Result<TransactionRequest, TransferError> {
    let call = ERC20::approveCall {
        spender: parse_address(spender)?,
        amount: U256::from(amount),
    };
    Ok(call_request(
        parse_address(token)?,
        U256::ZERO,
        call.abi_encode(),
        gas_limit,
    ))
}

/// Native currency sent with the deposit: the fee when it is charged in the
/// native currency, plus the amount when the resource is the native currency.
pub fn deposit_value(resource: &Resource, amount: u128, fee: &Fee) -> U256 {
    let mut value = U256::ZERO;
    if fee.is_native() {
        value += U256::from(fee.amount);
    }
    if resource.native {
        value += U256::from(amount);
    }
    value
}

/// Approval letting the fee handler pull a token-denominated fee.
fn fee_approval(fee: &Fee, gas_limit: Option<u64>) -> Result<Option<TransactionRequest>, TransferError> {
    match &fee.token_address {
        Some(token) if fee.amount > 0 => {
            approval_request(token, &fee.handler_address, fee.amount, gas_limit).map(Some)
        }
        _ => Ok(None),
    }
}

/// Resolves the fee of `transfer` and assembles its approvals and deposit.
pub async fn prepare_fungible_deposit<C: FeeHandlerClient>(
    registry: &Registry,
    fees: &FeeResolver<C>,
    transfer: &FungibleTransfer<'_>,
    gas_limit: Option<u64>,
) -> Result<EvmDeposit, TransferError> {
    let route = &transfer.route;
    ensure_network(route.source, Network::Evm)?;

    let recipient = recipient_bytes(route.destination.network, &transfer.recipient)?;
    let deposit_data = fungible_deposit_data(transfer.amount, &recipient);

    let fee_route = FeeRoute::new(route, transfer.sender.as_str(), deposit_data.clone());
    let fee = fees.fee_for_route(registry, &fee_route).await?;

    let mut approvals = Vec::new();
    if !route.resource.native {
        let token = route
            .resource
            .address
            .as_deref()
            .ok_or(TransferError::MissingResourceField {
                domain: route.source.id,
                resource: route.resource.resource_id,
                field: "token address",
            })?;
        let handler = registry.resource_handler(route.source, ResourceType::Fungible)?;
        approvals.push(approval_request(token, handler, transfer.amount, gas_limit)?);
    }
    approvals.extend(fee_approval(&fee, gas_limit)?);

    let value = deposit_value(route.resource, transfer.amount, &fee);
    let deposit = deposit_request(
        &route.source.bridge,
        route.destination.id,
        route.resource.resource_id,
        deposit_data,
        value,
        gas_limit,
    )?;

    info!(
        source = %route.source.id,
        destination = %route.destination.id,
        resource = %route.resource.resource_id,
        amount = transfer.amount,
        fee = fee.amount,
        approvals = approvals.len(),
        "prepared fungible deposit"
    );
    Ok(EvmDeposit {
        fee,
        approvals,
        deposit,
    })
}

/// Resolves the fee of a generic message and assembles its deposit.
pub async fn prepare_generic_deposit<C: FeeHandlerClient>(
    registry: &Registry,
    fees: &FeeResolver<C>,
    transfer: &GenericTransfer<'_>,
    gas_limit: Option<u64>,
) -> Result<EvmDeposit, TransferError> {
    let route = &transfer.route;
    ensure_network(route.source, Network::Evm)?;
    ensure_network(route.destination, Network::Evm)?;

    let selector = deposit_data::function_selector(&transfer.execute_function_signature)?;
    let contract = parse_address(&transfer.execute_contract)?;
    let depositor = parse_address(&transfer.sender)?;
    let deposit_data = permissionless_generic_deposit_data(
        transfer.max_fee,
        &selector,
        contract.as_slice(),
        depositor.as_slice(),
        &transfer.execution_data,
    )?;
    debug!(len = deposit_data.len(), "encoded generic deposit data");

    let fee_route = FeeRoute::new(route, transfer.sender.as_str(), deposit_data.clone());
    let fee = fees.fee_for_route(registry, &fee_route).await?;
    let approvals = fee_approval(&fee, gas_limit)?.into_iter().collect();

    let value = deposit_value(route.resource, 0, &fee);
    let deposit = deposit_request(
        &route.source.bridge,
        route.destination.id,
        route.resource.resource_id,
        deposit_data,
        value,
        gas_limit,
    )?;

    info!(
        source = %route.source.id,
        destination = %route.destination.id,
        contract = %contract,
        fee = fee.amount,
        "prepared generic deposit"
    );
    Ok(EvmDeposit {
        fee,
        approvals,
        deposit,
    })
}
