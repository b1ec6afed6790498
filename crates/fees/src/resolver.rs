use tracing::{debug, warn};
use xchain_primitives::{FeeHandlerConfig, FeeHandlerType};
use xchain_registry::Registry;

use crate::{
    client::FeeHandlerClient,
    errors::FeeError,
    route::resolve_fee_handler,
    types::{Fee, FeeRoute, PercentageFee},
};

/// A way of computing fees, one per on-chain handler type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeStrategy {
    /// Fixed fee reported by the handler.
    Basic,
    /// Rate applied to the amount, bounded by the handler's lower and upper bound.
    Percentage,
    /// Fee priced through a time-weighted-average-price oracle.
    Twap,
}

/// The order in which strategies are consulted.
pub const FEE_STRATEGIES: [FeeStrategy; 3] =
    [FeeStrategy::Basic, FeeStrategy::Percentage, FeeStrategy::Twap];

/// Bounds `raw` to `[lower, upper]`, both inclusive.
///
/// An upper bound of zero means the handler sets no ceiling. If the bounds
/// cross, the lower bound wins.
pub fn clamp_fee(raw: u128, lower: u128, upper: u128) -> u128 {
    let capped = if upper > 0 { raw.min(upper) } else { raw };
    capped.max(lower)
}

impl FeeStrategy {
    pub fn handler_type(self) -> FeeHandlerType {
        match self {
            FeeStrategy::Basic => FeeHandlerType::Basic,
            FeeStrategy::Percentage => FeeHandlerType::Percentage,
            FeeStrategy::Twap => FeeHandlerType::Twap,
        }
    }

    async fn calculate<C>(self, client: &C, route: &FeeRoute, handler: &str) -> Result<Fee, FeeError>
    where
        C: FeeHandlerClient + ?Sized,
    {
        let handler_type = self.handler_type();
        let query_err = |source| FeeError::Query {
            handler_type,
            handler: handler.to_owned(),
            source,
        };

        match self {
            FeeStrategy::Basic | FeeStrategy::Twap => {
                let raw = client
                    .calculate_fee(handler, &route.bare_fee_request())
                    .await
                    .map_err(query_err)?;
                Ok(Fee {
                    amount: raw.amount,
                    handler_type,
                    handler_address: handler.to_owned(),
                    token_address: raw.token_address,
                    percentage: None,
                })
            }
            FeeStrategy::Percentage => {
                let raw = client
                    .calculate_fee(handler, &route.fee_request())
                    .await
                    .map_err(query_err)?;
                let params = client
                    .percentage_fee_params(handler, route.destination, route.resource_id)
                    .await
                    .map_err(query_err)?;

                let amount = clamp_fee(raw.amount, params.lower_bound, params.upper_bound);
                if amount != raw.amount {
                    debug!(
                        raw = raw.amount,
                        lower = params.lower_bound,
                        upper = params.upper_bound,
                        amount,
                        "percentage fee clamped"
                    );
                }

                Ok(Fee {
                    amount,
                    handler_type,
                    handler_address: handler.to_owned(),
                    token_address: raw.token_address,
                    percentage: Some(PercentageFee {
                        fee_percentage: params.fee_percentage,
                        hundred_percent: params.hundred_percent,
                        lower_bound: params.lower_bound,
                        upper_bound: params.upper_bound,
                    }),
                })
            }
        }
    }
}

/// Computes fees against the current on-chain state. Nothing is cached.
#[derive(Debug)]
pub struct FeeResolver<C> {
    client: C,
}

impl<C: FeeHandlerClient> FeeResolver<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Computes the fee of `route` with the strategy matching `handler`'s type.
    ///
    /// Fails without touching the chain if no strategy handles the type.
    pub async fn resolve_fee(
        &self,
        route: &FeeRoute,
        handler: &FeeHandlerConfig,
    ) -> Result<Fee, FeeError> {
        let Some(strategy) = FEE_STRATEGIES
            .iter()
            .copied()
            .find(|s| s.handler_type() == handler.handler_type)
        else {
            warn!(
                handler = %handler.address,
                handler_type = %handler.handler_type,
                destination = %route.destination,
                resource = %route.resource_id,
                "no fee strategy for handler type"
            );
            return Err(FeeError::FeeCalculationUnspecified {
                handler_type: handler.handler_type,
                destination: route.destination,
                resource: route.resource_id,
            });
        };

        let fee = strategy
            .calculate(&self.client, route, &handler.address)
            .await?;
        debug!(
            source = %route.source,
            destination = %route.destination,
            resource = %route.resource_id,
            handler_type = %fee.handler_type,
            amount = fee.amount,
            "resolved fee"
        );
        Ok(fee)
    }

    /// Looks up the handler serving `route` and computes its fee.
    pub async fn fee_for_route(&self, registry: &Registry, route: &FeeRoute) -> Result<Fee, FeeError> {
        let handler = resolve_fee_handler(&self.client, registry, route).await?;
        self.resolve_fee(route, &handler).await
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use xchain_primitives::{DomainId, ResourceId};
    use xchain_registry::test_utils::{
        sample_registry, BASIC_FEE_HANDLER, ERC20_RESOURCE, ERC20_TOKEN, HOLESKY_DOMAIN,
        PERCENTAGE_FEE_HANDLER, SEPOLIA_DOMAIN, TWAP_FEE_HANDLER,
    };

    use super::*;
    use crate::client::{ChainQueryError, MockFeeHandlerClient, PercentageFeeParams, RawFee};

    const ONE_PERCENT: PercentageFeeParams = PercentageFeeParams {
        fee_percentage: 100,
        hundred_percent: 10_000,
        lower_bound: 0,
        upper_bound: 10_000,
    };

    fn route(deposit_data: Vec<u8>) -> FeeRoute {
        FeeRoute {
            sender: "0x0000000000000000000000000000000000000001".to_string(),
            source: DomainId::new(SEPOLIA_DOMAIN),
            destination: DomainId::new(HOLESKY_DOMAIN),
            resource_id: ERC20_RESOURCE.parse::<ResourceId>().unwrap(),
            deposit_data,
        }
    }

    fn handler(address: &str, handler_type: FeeHandlerType) -> FeeHandlerConfig {
        FeeHandlerConfig {
            address: address.to_string(),
            handler_type,
        }
    }

    /// Mock percentage handler: 1% of `amount`, computed with integer division.
    fn mock_percentage(amount: u128, params: PercentageFeeParams) -> MockFeeHandlerClient {
        let mut client = MockFeeHandlerClient::new();
        client
            .expect_calculate_fee()
            .withf(|handler, req| {
                handler.eq_ignore_ascii_case(PERCENTAGE_FEE_HANDLER) && !req.deposit_data.is_empty()
            })
            .times(1)
            .returning(move |_, _| {
                Ok(RawFee {
                    amount: amount * u128::from(params.fee_percentage)
                        / u128::from(params.hundred_percent),
                    token_address: Some(ERC20_TOKEN.to_string()),
                })
            });
        client
            .expect_percentage_fee_params()
            .withf(|handler, _, _| handler.eq_ignore_ascii_case(PERCENTAGE_FEE_HANDLER))
            .times(1)
            .returning(move |_, _, _| Ok(params));
        client
    }

    #[test]
    fn test_strategy_order() {
        let types: Vec<_> = FEE_STRATEGIES.iter().map(|s| s.handler_type()).collect();
        assert_eq!(
            types,
            vec![
                FeeHandlerType::Basic,
                FeeHandlerType::Percentage,
                FeeHandlerType::Twap
            ]
        );
    }

    #[test]
    fn test_clamp_fee_cases() {
        // 1% of 1_000_000 hits the upper bound exactly.
        assert_eq!(clamp_fee(10_000, 0, 10_000), 10_000);
        assert_eq!(clamp_fee(10_001, 0, 10_000), 10_000);
        // 1% of 10 rounds to zero and is lifted to the lower bound.
        assert_eq!(clamp_fee(0, 5, 10_000), 5);
        assert_eq!(clamp_fee(0, 0, 10_000), 0);
        // No ceiling.
        assert_eq!(clamp_fee(1 << 100, 1, 0), 1 << 100);
        // Crossed bounds resolve to the lower bound.
        assert_eq!(clamp_fee(50, 100, 10), 100);
    }

    proptest! {
        #[test]
        fn proptest_clamp_within_bounds(raw in any::<u128>(), lower in 0u128..1_000_000, span in 1u128..1_000_000) {
            let upper = lower + span;
            let fee = clamp_fee(raw, lower, upper);
            prop_assert!(fee >= lower && fee <= upper);
            if raw >= lower && raw <= upper {
                prop_assert_eq!(fee, raw);
            }
        }
    }

    #[tokio::test]
    async fn test_basic_fee_uses_empty_deposit_data() {
        let mut client = MockFeeHandlerClient::new();
        client
            .expect_calculate_fee()
            .withf(|handler, req| {
                handler.eq_ignore_ascii_case(BASIC_FEE_HANDLER)
                    && req.deposit_data.is_empty()
                    && req.fee_data.is_empty()
            })
            .times(1)
            .returning(|_, _| {
                Ok(RawFee {
                    amount: 1_000_000_000_000_000,
                    token_address: None,
                })
            });

        let resolver = FeeResolver::new(client);
        let fee = resolver
            .resolve_fee(&route(vec![1; 64]), &handler(BASIC_FEE_HANDLER, FeeHandlerType::Basic))
            .await
            .unwrap();

        assert_eq!(fee.amount, 1_000_000_000_000_000);
        assert_eq!(fee.handler_type, FeeHandlerType::Basic);
        assert!(fee.is_native());
        assert!(fee.percentage.is_none());
    }

    #[tokio::test]
    async fn test_percentage_fee_only_calls_percentage_handler() {
        let client = mock_percentage(1_000_000, ONE_PERCENT);
        let resolver = FeeResolver::new(client);
        let fee = resolver
            .resolve_fee(
                &route(vec![1; 64]),
                &handler(PERCENTAGE_FEE_HANDLER, FeeHandlerType::Percentage),
            )
            .await
            .unwrap();

        assert_eq!(fee.amount, 10_000);
        assert_eq!(fee.token_address.as_deref(), Some(ERC20_TOKEN));
        let pct = fee.percentage.unwrap();
        assert!((pct.rate() - 0.01).abs() < f64::EPSILON);
        assert_eq!(pct.upper_bound, 10_000);
    }

    #[tokio::test]
    async fn test_percentage_fee_lifted_to_lower_bound() {
        let params = PercentageFeeParams {
            lower_bound: 7,
            ..ONE_PERCENT
        };
        let resolver = FeeResolver::new(mock_percentage(10, params));
        let fee = resolver
            .resolve_fee(
                &route(vec![1; 64]),
                &handler(PERCENTAGE_FEE_HANDLER, FeeHandlerType::Percentage),
            )
            .await
            .unwrap();
        assert_eq!(fee.amount, 7);
    }

    #[tokio::test]
    async fn test_twap_fee_returned_unclamped() {
        let mut client = MockFeeHandlerClient::new();
        client
            .expect_calculate_fee()
            .withf(|handler, req| {
                handler.eq_ignore_ascii_case(TWAP_FEE_HANDLER) && req.deposit_data.is_empty()
            })
            .times(1)
            .returning(|_, _| {
                Ok(RawFee {
                    amount: 123_456_789,
                    token_address: None,
                })
            });

        let resolver = FeeResolver::new(client);
        let fee = resolver
            .resolve_fee(&route(Vec::new()), &handler(TWAP_FEE_HANDLER, FeeHandlerType::Twap))
            .await
            .unwrap();
        assert_eq!(fee.amount, 123_456_789);
        assert_eq!(fee.handler_type, FeeHandlerType::Twap);
    }

    #[tokio::test]
    async fn test_undefined_handler_fails_without_chain_calls() {
        // No expectations: any chain call panics.
        let resolver = FeeResolver::new(MockFeeHandlerClient::new());
        let err = resolver
            .resolve_fee(&route(Vec::new()), &handler("0x01", FeeHandlerType::Undefined))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FeeError::FeeCalculationUnspecified {
                handler_type: FeeHandlerType::Undefined,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_query_revert_is_not_substituted() {
        let mut client = MockFeeHandlerClient::new();
        client
            .expect_calculate_fee()
            .times(1)
            .returning(|_, _| Err(ChainQueryError::Call("execution reverted".to_string())));

        let resolver = FeeResolver::new(client);
        let err = resolver
            .resolve_fee(&route(Vec::new()), &handler(BASIC_FEE_HANDLER, FeeHandlerType::Basic))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FeeError::Query {
                handler_type: FeeHandlerType::Basic,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_fee_for_route_looks_up_handler_then_resolves() {
        let registry = sample_registry();
        let mut client = mock_percentage(1_000_000, ONE_PERCENT);
        client
            .expect_route_fee_handler()
            .times(1)
            .returning(|_, _, _| Ok(Some(PERCENTAGE_FEE_HANDLER.to_string())));

        let resolver = FeeResolver::new(client);
        let fee = resolver
            .fee_for_route(&registry, &route(vec![1; 64]))
            .await
            .unwrap();
        assert_eq!(fee.handler_type, FeeHandlerType::Percentage);
        assert_eq!(fee.amount, 10_000);
    }
}
