use bitcoin::{
    key::CompressedPublicKey,
    secp256k1::{PublicKey, Secp256k1, Verification},
    Address, Amount, OutPoint, Psbt, ScriptBuf, Transaction, Txid,
};
use xchain_primitives::DomainId;

/// An unspent output owned by the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtxoData {
    pub txid: Txid,
    pub vout: u32,
    pub value: Amount,
}

impl UtxoData {
    pub fn outpoint(&self) -> OutPoint {
        OutPoint::new(self.txid, self.vout)
    }
}

/// How the sender's UTXOs are locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Native segwit v0, spent with an ECDSA signature.
    P2wpkh,
    /// Taproot key path, spent with a Schnorr signature over the tweaked key.
    P2tr,
}

impl AddressType {
    /// Script the sender's UTXOs are locked to.
    pub fn script_pubkey<C: Verification>(self, secp: &Secp256k1<C>, key: PublicKey) -> ScriptBuf {
        match self {
            AddressType::P2wpkh => ScriptBuf::new_p2wpkh(&CompressedPublicKey(key).wpubkey_hash()),
            AddressType::P2tr => ScriptBuf::new_p2tr(secp, key.x_only_public_key().0, None),
        }
    }
}

/// Everything needed to build a deposit transaction.
#[derive(Debug, Clone)]
pub struct BuildParams {
    /// Inputs, spent in this order.
    pub utxos: Vec<UtxoData>,
    pub public_key: PublicKey,
    pub address_type: AddressType,
    /// Amount bridged to the deposit address.
    pub amount: Amount,
    /// Sats per virtual byte.
    pub fee_rate: u64,
    pub deposit_address: Address,
    pub fee_address: Address,
    pub change_address: Address,
    /// Recipient on the destination domain.
    pub destination_address: String,
    pub destination_domain: DomainId,
}

impl BuildParams {
    pub(crate) fn total_input(&self) -> Option<Amount> {
        self.utxos
            .iter()
            .try_fold(Amount::ZERO, |acc, utxo| acc.checked_add(utxo.value))
    }
}

/// A signed and finalized deposit.
#[derive(Debug, Clone)]
pub struct BuiltTransaction {
    pub psbt: Psbt,
    pub transaction: Transaction,
    /// Fee paid to the bridge fee address.
    pub fee: Amount,
    /// Virtual size measured on the dry run.
    pub vsize: u64,
}
