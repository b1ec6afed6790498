use bitcoin::{
    absolute::LockTime,
    script::PushBytesBuf,
    secp256k1::Secp256k1,
    transaction::Version,
    Amount, Psbt, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness,
};
use tracing::{debug, info};

use crate::{
    errors::BuildError,
    payload::deposit_payload,
    signer::PsbtSigner,
    types::{AddressType, BuildParams, BuiltTransaction},
};

/// Builds, signs and finalizes a deposit transaction.
///
/// The transaction is first assembled with a zero fee and signed with the
/// real signer to learn its virtual size. The fee is `vsize * fee_rate`; the
/// second pass pays it to the fee address and takes it out of the change.
/// Both passes spend exactly the input total.
pub fn build_transaction<S>(params: &BuildParams, signer: &S) -> Result<BuiltTransaction, BuildError>
where
    S: PsbtSigner + ?Sized,
{
    if params.utxos.is_empty() {
        return Err(BuildError::EmptyUtxoSet);
    }
    if signer.public_key() != params.public_key {
        return Err(BuildError::PublicKeyMismatch);
    }

    let total = params.total_input().ok_or(BuildError::ValueOverflow)?;
    if params.amount > total {
        return Err(BuildError::InsufficientFunds {
            available: total,
            required: params.amount,
        });
    }

    let payload = deposit_payload(&params.destination_address, params.destination_domain)?;
    let secp = Secp256k1::verification_only();
    let prevout_script = params
        .address_type
        .script_pubkey(&secp, params.public_key);

    let (_, dry_tx) = assemble(params, signer, &payload, &prevout_script, Amount::ZERO, total)?;
    let vsize = dry_tx.vsize() as u64;
    let fee = vsize
        .checked_mul(params.fee_rate)
        .map(Amount::from_sat)
        .ok_or(BuildError::ValueOverflow)?;
    debug!(
        inputs = params.utxos.len(),
        vsize,
        fee_rate = params.fee_rate,
        %fee,
        "sized deposit transaction"
    );

    let required = params
        .amount
        .checked_add(fee)
        .ok_or(BuildError::ValueOverflow)?;
    if required > total {
        return Err(BuildError::InsufficientFunds {
            available: total,
            required,
        });
    }

    let (psbt, transaction) = assemble(params, signer, &payload, &prevout_script, fee, total)?;
    info!(
        txid = %transaction.compute_txid(),
        amount = %params.amount,
        %fee,
        destination = %params.destination_address,
        domain = %params.destination_domain,
        "built deposit transaction"
    );

    Ok(BuiltTransaction {
        psbt,
        transaction,
        fee,
        vsize,
    })
}

/// Builds the four-output deposit paying `fee`, signs and finalizes it.
fn assemble<S>(
    params: &BuildParams,
    signer: &S,
    payload: &PushBytesBuf,
    prevout_script: &ScriptBuf,
    fee: Amount,
    total: Amount,
) -> Result<(Psbt, Transaction), BuildError>
where
    S: PsbtSigner + ?Sized,
{
    let change = total
        .checked_sub(params.amount)
        .and_then(|rest| rest.checked_sub(fee))
        .ok_or_else(|| BuildError::InsufficientFunds {
            available: total,
            required: params.amount.checked_add(fee).unwrap_or(Amount::MAX),
        })?;

    let output = vec![
        TxOut {
            value: Amount::ZERO,
            script_pubkey: ScriptBuf::new_op_return(payload),
        },
        TxOut {
            value: params.amount,
            script_pubkey: params.deposit_address.script_pubkey(),
        },
        TxOut {
            value: fee,
            script_pubkey: params.fee_address.script_pubkey(),
        },
        TxOut {
            value: change,
            script_pubkey: params.change_address.script_pubkey(),
        },
    ];

    let input = params
        .utxos
        .iter()
        .map(|utxo| TxIn {
            previous_output: utxo.outpoint(),
            script_sig: ScriptBuf::new(),
            sequence: Sequence::ENABLE_RBF_NO_LOCKTIME,
            witness: Witness::new(),
        })
        .collect();

    let unsigned = Transaction {
        version: Version(2),
        lock_time: LockTime::ZERO,
        input,
        output,
    };

    let internal_key = match params.address_type {
        AddressType::P2wpkh => None,
        AddressType::P2tr => Some(params.public_key.x_only_public_key().0),
    };

    let mut psbt = Psbt::from_unsigned_tx(unsigned)?;
    for (input, utxo) in psbt.inputs.iter_mut().zip(&params.utxos) {
        input.witness_utxo = Some(TxOut {
            value: utxo.value,
            script_pubkey: prevout_script.clone(),
        });
        input.tap_internal_key = internal_key;
    }

    signer.sign_psbt(&mut psbt, params.address_type)?;
    finalize(&mut psbt)?;

    let tx = psbt.clone().extract_tx()?;
    Ok((psbt, tx))
}

/// Moves signatures into final witnesses, clearing the signing fields.
fn finalize(psbt: &mut Psbt) -> Result<(), BuildError> {
    for (index, input) in psbt.inputs.iter_mut().enumerate() {
        let witness = if let Some(sig) = input.tap_key_sig.take() {
            Witness::p2tr_key_spend(&sig)
        } else {
            let (pubkey, sig) = input
                .partial_sigs
                .iter()
                .next()
                .ok_or(BuildError::Unsigned { index })?;
            Witness::p2wpkh(sig, &pubkey.inner)
        };

        input.final_script_witness = Some(witness);
        input.partial_sigs.clear();
        input.tap_internal_key = None;
        input.sighash_type = None;
    }
    Ok(())
}

/// Sum of witness UTXO values and sum of output values.
#[cfg(test)]
fn value_balance(psbt: &Psbt) -> (Amount, Amount) {
    let inputs = psbt
        .inputs
        .iter()
        .filter_map(|input| input.witness_utxo.as_ref())
        .map(|utxo| utxo.value)
        .sum();
    let outputs = psbt.unsigned_tx.output.iter().map(|out| out.value).sum();
    (inputs, outputs)
}
