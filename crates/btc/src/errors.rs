use bitcoin::{
    psbt::{self, ExtractTxError},
    secp256k1,
    sighash::{P2wpkhError, TaprootError},
    Amount,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no UTXOs to spend")]
    EmptyUtxoSet,

    #[error("insufficient funds: have {available}, need {required}")]
    InsufficientFunds { available: Amount, required: Amount },

    #[error("OP_RETURN payload is {len} bytes, limit is {max}")]
    PayloadTooLong { len: usize, max: usize },

    /// The signer holds a different key than the one the UTXOs are locked to.
    #[error("signer key does not match the spending public key")]
    PublicKeyMismatch,

    #[error("input or fee value overflows")]
    ValueOverflow,

    #[error("input {index} was not signed")]
    Unsigned { index: usize },

    #[error(transparent)]
    Signer(#[from] SignerError),

    #[error("psbt: {0}")]
    Psbt(#[from] psbt::Error),

    #[error("could not extract transaction: {0}")]
    Extract(#[from] ExtractTxError),
}

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("input {index} has no witness UTXO")]
    MissingUtxo { index: usize },

    #[error("input {index} is not locked to the signer's key")]
    KeyMismatch { index: usize },

    #[error("segwit v0 sighash: {0}")]
    P2wpkhSighash(#[from] P2wpkhError),

    #[error("taproot sighash: {0}")]
    TaprootSighash(#[from] TaprootError),

    #[error("secp256k1: {0}")]
    Secp(#[from] secp256k1::Error),
}
