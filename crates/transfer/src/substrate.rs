//! Extrinsic-shaped deposits for Substrate source domains.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;
use xchain_fees::{Fee, FeeHandlerClient, FeeResolver, FeeRoute};
use xchain_primitives::Network;
use xchain_registry::Registry;

use crate::{
    errors::TransferError,
    evm::{fungible_deposit_data, recipient_bytes},
    types::{ensure_network, FungibleTransfer},
};

const DEPOSIT_CALL: &str = "deposit";

/// A pallet call for the caller's Substrate client to sign and submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstrateCall {
    pub pallet: String,
    pub call: String,
    pub args: Value,
}

/// Resolved fee and the deposit call it applies to.
#[derive(Debug, Clone)]
pub struct SubstrateDeposit {
    pub fee: Fee,
    pub call: SubstrateCall,
}

/// Bridge pallet `deposit(asset, dest)` for a fungible transfer.
///
/// The asset is the resource's XCM multi-asset with the fungible amount
/// attached. The destination is the multilocation
/// `{ parents: 0, interior: X2(GeneralKey(recipient), GeneralIndex(domain)) }`
/// with the 20-byte recipient left padded to 32 bytes. Only EVM destinations
/// are reachable from the pallet.
pub fn deposit_call(transfer: &FungibleTransfer<'_>) -> Result<SubstrateCall, TransferError> {
    let route = &transfer.route;
    ensure_network(route.source, Network::Substrate)?;
    ensure_network(route.destination, Network::Evm)?;

    let asset_id = route
        .resource
        .xcm_multi_asset_id
        .clone()
        .ok_or(TransferError::MissingResourceField {
            domain: route.source.id,
            resource: route.resource.resource_id,
            field: "XCM multi-asset id",
        })?;

    let recipient = recipient_bytes(route.destination.network, &transfer.recipient)?;
    let mut key = [0u8; 32];
    key[32 - recipient.len()..].copy_from_slice(&recipient);

    let args = json!({
        "asset": {
            "id": asset_id,
            // String keeps amounts above 2^64 exact.
            "fun": { "fungible": transfer.amount.to_string() },
        },
        "dest": {
            "parents": 0,
            "interior": {
                "x2": [
                    { "generalKey": [recipient.len(), format!("0x{}", hex::encode(key))] },
                    { "generalIndex": route.destination.id.get() },
                ],
            },
        },
    });

    Ok(SubstrateCall {
        pallet: route.source.bridge.clone(),
        call: DEPOSIT_CALL.to_owned(),
        args,
    })
}

/// Resolves the fee of `transfer` through the source domain's fee pallets and
/// assembles its deposit call.
///
/// Fee handlers see the same deposit data layout as on EVM, so percentage
/// handlers read the amount from the same offset.
pub async fn prepare_deposit<C: FeeHandlerClient>(
    registry: &Registry,
    fees: &FeeResolver<C>,
    transfer: &FungibleTransfer<'_>,
) -> Result<SubstrateDeposit, TransferError> {
    let call = deposit_call(transfer)?;

    let route = &transfer.route;
    let recipient = recipient_bytes(route.destination.network, &transfer.recipient)?;
    let deposit_data = fungible_deposit_data(transfer.amount, &recipient);
    let fee_route = FeeRoute::new(route, transfer.sender.as_str(), deposit_data);
    let fee = fees.fee_for_route(registry, &fee_route).await?;

    info!(
        source = %route.source.id,
        destination = %route.destination.id,
        resource = %route.resource.resource_id,
        amount = transfer.amount,
        fee = fee.amount,
        pallet = %call.pallet,
        "prepared substrate deposit"
    );
    Ok(SubstrateDeposit { fee, call })
}
