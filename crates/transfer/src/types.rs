use xchain_primitives::{Domain, Network, ResourceType};
use xchain_registry::TransferRoute;

use crate::errors::TransferError;

/// A transfer of a fungible resource.
#[derive(Debug, Clone)]
pub struct FungibleTransfer<'a> {
    pub route: TransferRoute<'a>,
    pub sender: String,
    /// Recipient on the destination domain, in that domain's address format.
    pub recipient: String,
    /// Amount in the smallest unit of the resource.
    pub amount: u128,
}

impl<'a> FungibleTransfer<'a> {
    pub fn new(
        route: TransferRoute<'a>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: u128,
    ) -> Result<Self, TransferError> {
        ensure_resource_type(&route, ResourceType::Fungible)?;
        Ok(Self {
            route,
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        })
    }
}

/// A permissionless generic message: a contract call executed on the
/// destination domain.
#[derive(Debug, Clone)]
pub struct GenericTransfer<'a> {
    pub route: TransferRoute<'a>,
    pub sender: String,
    /// Contract called on the destination domain.
    pub execute_contract: String,
    /// Four-byte selector of the called function, hex encoded.
    pub execute_function_signature: String,
    /// Most the executor may spend on gas, in the destination's native unit.
    pub max_fee: u128,
    pub execution_data: Vec<u8>,
}

impl<'a> GenericTransfer<'a> {
    pub fn new(
        route: TransferRoute<'a>,
        sender: impl Into<String>,
        execute_contract: impl Into<String>,
        execute_function_signature: impl Into<String>,
        max_fee: u128,
        execution_data: Vec<u8>,
    ) -> Result<Self, TransferError> {
        ensure_resource_type(&route, ResourceType::PermissionlessGeneric)?;
        Ok(Self {
            route,
            sender: sender.into(),
            execute_contract: execute_contract.into(),
            execute_function_signature: execute_function_signature.into(),
            max_fee,
            execution_data,
        })
    }
}

fn ensure_resource_type(route: &TransferRoute<'_>, expected: ResourceType) -> Result<(), TransferError> {
    let actual = route.resource.resource_type;
    if actual != expected {
        return Err(TransferError::UnsupportedResourceType {
            resource: route.resource.resource_id,
            expected,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn ensure_network(domain: &Domain, expected: Network) -> Result<(), TransferError> {
    if domain.network != expected {
        return Err(TransferError::NetworkMismatch {
            domain: domain.id,
            expected,
            actual: domain.network,
        });
    }
    Ok(())
}
