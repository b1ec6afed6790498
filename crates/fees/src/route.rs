use tracing::debug;
use xchain_primitives::FeeHandlerConfig;
use xchain_registry::Registry;

use crate::{client::FeeHandlerClient, errors::FeeError, types::FeeRoute};

/// Finds the fee handler that applies to `route`.
///
/// Asks the source domain's fee router which handler serves the
/// (destination, resource) pair, then matches it against the handlers the
/// bridge config lists for the source domain to learn its type.
pub async fn resolve_fee_handler<C>(
    client: &C,
    registry: &Registry,
    route: &FeeRoute,
) -> Result<FeeHandlerConfig, FeeError>
where
    C: FeeHandlerClient + ?Sized,
{
    let source = registry.resolve_domain(route.source)?;
    registry.resolve_domain(route.destination)?;

    let handler = client
        .route_fee_handler(&source.fee_router, route.destination, route.resource_id)
        .await
        .map_err(FeeError::Router)?
        .ok_or(FeeError::RouteNotRegistered {
            source_domain: route.source,
            destination: route.destination,
            resource: route.resource_id,
        })?;

    let config = registry
        .fee_handler(source, &handler)
        .cloned()
        .ok_or_else(|| FeeError::UnregisteredFeeHandler {
            handler: handler.clone(),
            source_domain: route.source,
            destination: route.destination,
            resource: route.resource_id,
        })?;

    debug!(
        source = %route.source,
        destination = %route.destination,
        resource = %route.resource_id,
        handler = %config.address,
        handler_type = %config.handler_type,
        "resolved fee handler"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use xchain_primitives::{DomainId, FeeHandlerType, ResourceId};
    use xchain_registry::test_utils::{
        sample_registry, ERC20_RESOURCE, FEE_ROUTER, HOLESKY_DOMAIN, PERCENTAGE_FEE_HANDLER,
        SEPOLIA_DOMAIN,
    };

    use super::*;
    use crate::client::{ChainQueryError, MockFeeHandlerClient};

    fn route() -> FeeRoute {
        FeeRoute {
            sender: "0x0000000000000000000000000000000000000001".to_string(),
            source: DomainId::new(SEPOLIA_DOMAIN),
            destination: DomainId::new(HOLESKY_DOMAIN),
            resource_id: ERC20_RESOURCE.parse::<ResourceId>().unwrap(),
            deposit_data: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_router_handler_matched_case_insensitively() {
        let registry = sample_registry();
        let mut client = MockFeeHandlerClient::new();
        client
            .expect_route_fee_handler()
            .withf(|router, dest, _| {
                router.eq_ignore_ascii_case(FEE_ROUTER) && *dest == DomainId::new(HOLESKY_DOMAIN)
            })
            .times(1)
            .returning(|_, _, _| Ok(Some(PERCENTAGE_FEE_HANDLER.to_uppercase().replace("0X", "0x"))));

        let handler = resolve_fee_handler(&client, &registry, &route()).await.unwrap();
        assert_eq!(handler.handler_type, FeeHandlerType::Percentage);
        assert_eq!(handler.address, PERCENTAGE_FEE_HANDLER);
    }

    #[tokio::test]
    async fn test_zero_address_is_route_not_registered() {
        let registry = sample_registry();
        let mut client = MockFeeHandlerClient::new();
        client
            .expect_route_fee_handler()
            .times(1)
            .returning(|_, _, _| Ok(None));

        let err = resolve_fee_handler(&client, &registry, &route()).await.unwrap_err();
        assert!(matches!(err, FeeError::RouteNotRegistered { .. }));
    }

    #[tokio::test]
    async fn test_unknown_handler_is_unregistered() {
        let registry = sample_registry();
        let mut client = MockFeeHandlerClient::new();
        client
            .expect_route_fee_handler()
            .times(1)
            .returning(|_, _, _| Ok(Some("0x00000000000000000000000000000000deadbeef".to_string())));

        let err = resolve_fee_handler(&client, &registry, &route()).await.unwrap_err();
        assert!(matches!(
            err,
            FeeError::UnregisteredFeeHandler { ref handler, .. } if handler.ends_with("deadbeef")
        ));
    }

    #[tokio::test]
    async fn test_unknown_destination_fails_before_any_query() {
        let registry = sample_registry();
        let client = MockFeeHandlerClient::new();
        let route = FeeRoute {
            destination: DomainId::new(77),
            ..route()
        };

        let err = resolve_fee_handler(&client, &registry, &route).await.unwrap_err();
        assert!(matches!(err, FeeError::Registry(_)));
    }

    #[tokio::test]
    async fn test_router_failure_propagates() {
        let registry = sample_registry();
        let mut client = MockFeeHandlerClient::new();
        client
            .expect_route_fee_handler()
            .returning(|_, _, _| Err(ChainQueryError::Call("execution reverted".to_string())));

        let err = resolve_fee_handler(&client, &registry, &route()).await.unwrap_err();
        assert!(matches!(err, FeeError::Router(ChainQueryError::Call(_))));
    }
}
