//! Assembly of bridge transfers for each chain family.
//!
//! EVM and Substrate transfers come out unsigned, for the caller's wallet to
//! sign and submit. Bitcoin transfers come out as a signed, finalized PSBT.

mod btc;
mod errors;
pub mod evm;
pub mod liquidity;
pub mod substrate;
mod types;

pub use btc::BitcoinTransfer;
pub use errors::{LiquidityError, TransferError};
pub use types::{FungibleTransfer, GenericTransfer};
