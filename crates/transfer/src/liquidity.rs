//! Advisory check that the destination can release a transfer.
//!
//! Nothing is reserved, so a passing check can still be invalidated by
//! concurrent transfers before this one is executed.

use async_trait::async_trait;
use tracing::{debug, warn};
use xchain_fees::ChainQueryError;
use xchain_primitives::{Domain, DomainId, Network, Resource, ResourceId};
use xchain_registry::{Registry, RegistryError, TransferRoute};

use crate::errors::LiquidityError;

/// Whether a holder with `balance` can release `amount` of `resource`.
///
/// Burnable resources are minted on release and never run short.
pub fn has_sufficient_liquidity(resource: &Resource, amount: u128, balance: u128) -> bool {
    resource.burnable || amount <= balance
}

/// Balance lookup on a destination domain.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait BalanceQuery: Send + Sync {
    /// Balance of `resource` held by `holder` on `domain`.
    async fn balance(
        &self,
        domain: DomainId,
        holder: &str,
        resource: ResourceId,
    ) -> Result<u128, ChainQueryError>;
}

/// Account that releases `resource` on `domain`: the resource's deposit
/// address on Bitcoin, the custody handler elsewhere.
fn liquidity_holder<'d>(
    registry: &Registry,
    domain: &'d Domain,
    resource: &'d Resource,
) -> Result<&'d str, LiquidityError> {
    match domain.network {
        Network::Bitcoin => resource.address.as_deref().ok_or(LiquidityError::NoHolder {
            domain: domain.id,
            resource: resource.resource_id,
        }),
        Network::Evm | Network::Substrate => {
            Ok(registry.resource_handler(domain, resource.resource_type)?)
        }
    }
}

/// Checks that the destination of `route` holds at least `amount`.
///
/// Burnable resources pass without querying the chain.
pub async fn check_destination_liquidity<Q>(
    registry: &Registry,
    route: &TransferRoute<'_>,
    amount: u128,
    query: &Q,
) -> Result<(), LiquidityError>
where
    Q: BalanceQuery + ?Sized,
{
    let destination = route.destination;
    let resource = route
        .destination_resource()
        .ok_or(RegistryError::ResourceNotFound {
            domain: destination.id,
            resource: route.resource.resource_id,
        })?;

    if resource.burnable {
        debug!(resource = %resource.resource_id, "burnable resource, skipping liquidity check");
        return Ok(());
    }

    let holder = liquidity_holder(registry, destination, resource)?;
    let balance = query
        .balance(destination.id, holder, resource.resource_id)
        .await?;

    if !has_sufficient_liquidity(resource, amount, balance) {
        warn!(
            destination = %destination.id,
            resource = %resource.resource_id,
            %holder,
            balance,
            amount,
            "insufficient destination liquidity"
        );
        return Err(LiquidityError::Insufficient {
            available: balance,
            requested: amount,
        });
    }
    Ok(())
}
