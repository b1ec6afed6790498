use xchain_primitives::{DomainId, FeeHandlerType, ResourceId};
use xchain_registry::TransferRoute;

use crate::client::FeeRequest;

/// What a fee is being resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeRoute {
    pub sender: String,
    pub source: DomainId,
    pub destination: DomainId,
    pub resource_id: ResourceId,
    /// Deposit data of the transfer; percentage handlers read the amount from it.
    pub deposit_data: Vec<u8>,
}

impl FeeRoute {
    pub fn new(route: &TransferRoute<'_>, sender: impl Into<String>, deposit_data: Vec<u8>) -> Self {
        Self {
            sender: sender.into(),
            source: route.source.id,
            destination: route.destination.id,
            resource_id: route.resource.resource_id,
            deposit_data,
        }
    }

    /// `calculateFee` arguments carrying this route's deposit data.
    pub(crate) fn fee_request(&self) -> FeeRequest {
        FeeRequest {
            sender: self.sender.clone(),
            source: self.source,
            destination: self.destination,
            resource_id: self.resource_id,
            deposit_data: self.deposit_data.clone(),
            fee_data: Vec::new(),
        }
    }

    /// `calculateFee` arguments with empty deposit data and metadata.
    pub(crate) fn bare_fee_request(&self) -> FeeRequest {
        FeeRequest {
            deposit_data: Vec::new(),
            ..self.fee_request()
        }
    }
}

/// Details reported alongside a percentage fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageFee {
    pub fee_percentage: u32,
    pub hundred_percent: u32,
    pub lower_bound: u128,
    pub upper_bound: u128,
}

impl PercentageFee {
    /// The configured rate as a fraction. Informational only; the fee amount
    /// comes from the handler itself.
    pub fn rate(&self) -> f64 {
        if self.hundred_percent == 0 {
            return 0.0;
        }
        f64::from(self.fee_percentage) / f64::from(self.hundred_percent)
    }
}

/// A resolved fee. Computed fresh per request.
#[derive(Debug, Clone, PartialEq)]
pub struct Fee {
    /// Amount in the smallest unit of the fee token.
    pub amount: u128,
    pub handler_type: FeeHandlerType,
    pub handler_address: String,
    /// Token the fee is charged in; `None` for the native currency.
    pub token_address: Option<String>,
    pub percentage: Option<PercentageFee>,
}

impl Fee {
    pub fn is_native(&self) -> bool {
        self.token_address.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rate_is_informational_fraction() {
        let pct = PercentageFee {
            fee_percentage: 100,
            hundred_percent: 10_000,
            lower_bound: 0,
            upper_bound: 10_000,
        };
        assert!((pct.rate() - 0.01).abs() < f64::EPSILON);

        let degenerate = PercentageFee {
            hundred_percent: 0,
            ..pct
        };
        assert_eq!(degenerate.rate(), 0.0);
    }

    #[test]
    fn test_bare_request_drops_deposit_data() {
        let route = FeeRoute {
            sender: "0xabc".to_string(),
            source: DomainId::new(1),
            destination: DomainId::new(2),
            resource_id: ResourceId::zero(),
            deposit_data: vec![1, 2, 3],
        };
        assert_eq!(route.fee_request().deposit_data, vec![1, 2, 3]);
        assert!(route.bare_fee_request().deposit_data.is_empty());
        assert!(route.bare_fee_request().fee_data.is_empty());
    }
}
