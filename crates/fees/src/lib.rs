//! Fee resolution for bridge transfers.
//!
//! The fee handler configured for a route is looked up through the source
//! domain's fee router, then an ordered list of strategies picks the one
//! matching the handler type and queries the chain for the amount.

mod client;
mod errors;
pub mod evm;
mod resolver;
mod route;
mod types;

pub use client::{ChainQueryError, FeeHandlerClient, FeeRequest, PercentageFeeParams, RawFee};
#[cfg(any(test, feature = "test-utils"))]
pub use client::MockFeeHandlerClient;
pub use errors::FeeError;
pub use resolver::{clamp_fee, FeeResolver, FeeStrategy, FEE_STRATEGIES};
pub use route::resolve_fee_handler;
pub use types::{Fee, FeeRoute, PercentageFee};
