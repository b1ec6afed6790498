use bitcoin::{
    ecdsa,
    secp256k1::{All, Keypair, Message, PublicKey, Secp256k1, SecretKey},
    sighash::{Prevouts, SighashCache},
    taproot::{self, TapTweakHash},
    EcdsaSighashType, PublicKey as BitcoinPublicKey, Psbt, Script, TapSighashType, TxOut,
};

use crate::{errors::SignerError, types::AddressType};

/// Signs every input of a deposit PSBT.
///
/// Implementations add signatures to the PSBT inputs (`partial_sigs` for
/// segwit v0, `tap_key_sig` for taproot) and leave finalization to the caller.
pub trait PsbtSigner {
    fn public_key(&self) -> PublicKey;

    fn sign_psbt(&self, psbt: &mut Psbt, address_type: AddressType) -> Result<(), SignerError>;
}

/// Signs with a single in-memory key pair.
///
/// Signatures are deterministic, so signing the same PSBT twice yields the
/// same witness.
#[derive(Debug, Clone)]
pub struct KeypairSigner {
    secp: Secp256k1<All>,
    keypair: Keypair,
}

impl KeypairSigner {
    pub fn new(secret_key: SecretKey) -> Self {
        let secp = Secp256k1::new();
        let keypair = Keypair::from_secret_key(&secp, &secret_key);
        Self { secp, keypair }
    }

    fn sign_p2wpkh(
        &self,
        psbt: &mut Psbt,
        prevouts: &[TxOut],
        expected_script: &Script,
    ) -> Result<(), SignerError> {
        let public_key = self.keypair.public_key();
        let mut cache = SighashCache::new(&psbt.unsigned_tx);
        let mut signatures = Vec::with_capacity(prevouts.len());

        for (index, prevout) in prevouts.iter().enumerate() {
            if prevout.script_pubkey.as_script() != expected_script {
                return Err(SignerError::KeyMismatch { index });
            }
            let sighash = cache.p2wpkh_signature_hash(
                index,
                &prevout.script_pubkey,
                prevout.value,
                EcdsaSighashType::All,
            )?;
            let msg = Message::from_digest_slice(sighash.as_ref())?;
            signatures.push(ecdsa::Signature {
                signature: self.secp.sign_ecdsa(&msg, &self.keypair.secret_key()),
                sighash_type: EcdsaSighashType::All,
            });
        }

        for (input, signature) in psbt.inputs.iter_mut().zip(signatures) {
            input
                .partial_sigs
                .insert(BitcoinPublicKey::new(public_key), signature);
        }
        Ok(())
    }

    fn sign_p2tr(
        &self,
        psbt: &mut Psbt,
        prevouts: &[TxOut],
        expected_script: &Script,
    ) -> Result<(), SignerError> {
        let (internal_key, _) = self.keypair.x_only_public_key();

        // BIP341 key-path tweak with no script tree.
        let tweak = TapTweakHash::from_key_and_tweak(internal_key, None);
        let tweaked = self.keypair.add_xonly_tweak(&self.secp, &tweak.to_scalar())?;

        let mut cache = SighashCache::new(&psbt.unsigned_tx);
        let prevouts_ref = Prevouts::All(prevouts);
        let mut signatures = Vec::with_capacity(prevouts.len());

        for (index, prevout) in prevouts.iter().enumerate() {
            if prevout.script_pubkey.as_script() != expected_script {
                return Err(SignerError::KeyMismatch { index });
            }
            let sighash = cache.taproot_key_spend_signature_hash(
                index,
                &prevouts_ref,
                TapSighashType::Default,
            )?;
            let msg = Message::from_digest_slice(sighash.as_ref())?;
            signatures.push(taproot::Signature {
                signature: self.secp.sign_schnorr_no_aux_rand(&msg, &tweaked),
                sighash_type: TapSighashType::Default,
            });
        }

        for (input, signature) in psbt.inputs.iter_mut().zip(signatures) {
            input.tap_internal_key = Some(internal_key);
            input.tap_key_sig = Some(signature);
        }
        Ok(())
    }
}

impl PsbtSigner for KeypairSigner {
    fn public_key(&self) -> PublicKey {
        self.keypair.public_key()
    }

    fn sign_psbt(&self, psbt: &mut Psbt, address_type: AddressType) -> Result<(), SignerError> {
        let prevouts = psbt
            .inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                input
                    .witness_utxo
                    .clone()
                    .ok_or(SignerError::MissingUtxo { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expected_script = address_type.script_pubkey(&self.secp, self.public_key());
        match address_type {
            AddressType::P2wpkh => self.sign_p2wpkh(psbt, &prevouts, &expected_script),
            AddressType::P2tr => self.sign_p2tr(psbt, &prevouts, &expected_script),
        }
    }
}
