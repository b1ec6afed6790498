//! Sizing and signing of Bitcoin bridge deposits.
//!
//! A deposit spends the caller's UTXOs into four outputs: an `OP_RETURN`
//! naming the recipient, the bridged amount to the deposit address, the
//! bridge fee and the change. Because the fee depends on the signed size,
//! the transaction is built twice; the first pass measures the virtual size
//! and the second pays for it.

mod builder;
mod errors;
mod payload;
mod signer;
mod types;

pub use builder::build_transaction;
pub use errors::{BuildError, SignerError};
pub use payload::{deposit_payload, MAX_OP_RETURN_LEN};
pub use signer::{KeypairSigner, PsbtSigner};
pub use types::{AddressType, BuildParams, BuiltTransaction, UtxoData};
