//! Encoding of the `depositData` argument of `Bridge.deposit`.

use alloy::primitives::{Address, U256};
use xchain_primitives::Network;

use crate::errors::TransferError;

/// Substrate `MultiLocation { parents: 0, interior: X1(AccountId32 { network: None, id }) }`
/// up to the account id, SCALE encoded.
const SUBSTRATE_ACCOUNT_PREFIX: [u8; 4] = [0x00, 0x01, 0x01, 0x00];

fn decode_hex(field: &'static str, value: &str) -> Result<Vec<u8>, TransferError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    hex::decode(digits).map_err(|source| TransferError::InvalidHex { field, source })
}

/// Recipient as the destination domain's handler expects it.
///
/// EVM recipients are the 20 address bytes, Substrate recipients the
/// multilocation of a 32-byte account id (given as hex), and Bitcoin
/// recipients the address string itself.
pub fn recipient_bytes(network: Network, recipient: &str) -> Result<Vec<u8>, TransferError> {
    let invalid = || TransferError::InvalidAddress {
        address: recipient.to_owned(),
        network,
    };
    match network {
        Network::Evm => {
            let address = recipient.parse::<Address>().map_err(|_| invalid())?;
            Ok(address.to_vec())
        }
        Network::Substrate => {
            let id = decode_hex("recipient", recipient)?;
            if id.len() != 32 {
                return Err(invalid());
            }
            let mut out = Vec::with_capacity(SUBSTRATE_ACCOUNT_PREFIX.len() + id.len());
            out.extend_from_slice(&SUBSTRATE_ACCOUNT_PREFIX);
            out.extend_from_slice(&id);
            Ok(out)
        }
        Network::Bitcoin => {
            if recipient.is_empty() {
                return Err(invalid());
            }
            Ok(recipient.as_bytes().to_vec())
        }
    }
}

/// `amount (32) || len(recipient) (32) || recipient`
pub fn fungible_deposit_data(amount: u128, recipient: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(64 + recipient.len());
    out.extend_from_slice(&U256::from(amount).to_be_bytes::<32>());
    out.extend_from_slice(&U256::from(recipient.len()).to_be_bytes::<32>());
    out.extend_from_slice(recipient);
    out
}

/// `maxFee (32) || len(fn) (2) || fn || len(contract) (1) || contract ||
/// len(depositor) (1) || depositor || executionData`
pub fn permissionless_generic_deposit_data(
    max_fee: u128,
    function_signature: &[u8],
    contract: &[u8],
    depositor: &[u8],
    execution_data: &[u8],
) -> Result<Vec<u8>, TransferError> {
    let fn_len = u16::try_from(function_signature.len()).map_err(|_| TransferError::FieldTooLong {
        field: "function signature",
        len: function_signature.len(),
        max: u16::MAX as usize,
    })?;
    let contract_len = u8::try_from(contract.len()).map_err(|_| TransferError::FieldTooLong {
        field: "execute contract",
        len: contract.len(),
        max: u8::MAX as usize,
    })?;
    let depositor_len = u8::try_from(depositor.len()).map_err(|_| TransferError::FieldTooLong {
        field: "depositor",
        len: depositor.len(),
        max: u8::MAX as usize,
    })?;

    let mut out = Vec::with_capacity(
        32 + 2 + function_signature.len() + 1 + contract.len() + 1 + depositor.len()
            + execution_data.len(),
    );
    out.extend_from_slice(&U256::from(max_fee).to_be_bytes::<32>());
    out.extend_from_slice(&fn_len.to_be_bytes());
    out.extend_from_slice(function_signature);
    out.push(contract_len);
    out.extend_from_slice(contract);
    out.push(depositor_len);
    out.extend_from_slice(depositor);
    out.extend_from_slice(execution_data);
    Ok(out)
}

pub(crate) fn function_selector(signature: &str) -> Result<Vec<u8>, TransferError> {
    decode_hex("function signature", signature)
}
