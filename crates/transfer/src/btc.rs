use bitcoin::{
    address::NetworkUnchecked, secp256k1::PublicKey, Address, Amount, Network as BitcoinNetwork,
};
use xchain_btc::{
    build_transaction, AddressType, BuildParams, BuiltTransaction, PsbtSigner, UtxoData,
};
use xchain_primitives::Network;

use crate::{
    errors::TransferError,
    types::{ensure_network, FungibleTransfer},
};

/// A deposit from a Bitcoin source domain.
#[derive(Debug, Clone)]
pub struct BitcoinTransfer<'a> {
    /// Route, recipient on the destination domain and amount in sats.
    pub transfer: FungibleTransfer<'a>,
    pub utxos: Vec<UtxoData>,
    pub public_key: PublicKey,
    pub address_type: AddressType,
    /// Sats per virtual byte.
    pub fee_rate: u64,
    pub change_address: String,
    pub network: BitcoinNetwork,
}

impl BitcoinTransfer<'_> {
    fn parse_address(&self, address: &str) -> Result<Address, TransferError> {
        address
            .parse::<Address<NetworkUnchecked>>()
            .ok()
            .and_then(|unchecked| unchecked.require_network(self.network).ok())
            .ok_or_else(|| TransferError::InvalidAddress {
                address: address.to_owned(),
                network: Network::Bitcoin,
            })
    }

    fn resource_field<'r>(
        &self,
        value: &'r Option<String>,
        field: &'static str,
    ) -> Result<&'r str, TransferError> {
        let route = &self.transfer.route;
        value
            .as_deref()
            .ok_or(TransferError::MissingResourceField {
                domain: route.source.id,
                resource: route.resource.resource_id,
                field,
            })
    }

    /// Builder inputs, with the deposit and fee addresses taken from the resource.
    pub fn build_params(&self) -> Result<BuildParams, TransferError> {
        let route = &self.transfer.route;
        ensure_network(route.source, Network::Bitcoin)?;

        let deposit = self.resource_field(&route.resource.address, "deposit address")?;
        let fee = self.resource_field(&route.resource.fee_address, "fee address")?;
        let amount = u64::try_from(self.transfer.amount)
            .map_err(|_| TransferError::AmountOutOfRange(self.transfer.amount))?;

        Ok(BuildParams {
            utxos: self.utxos.clone(),
            public_key: self.public_key,
            address_type: self.address_type,
            amount: Amount::from_sat(amount),
            fee_rate: self.fee_rate,
            deposit_address: self.parse_address(deposit)?,
            fee_address: self.parse_address(fee)?,
            change_address: self.parse_address(&self.change_address)?,
            destination_address: self.transfer.recipient.clone(),
            destination_domain: route.destination.id,
        })
    }

    /// Builds, signs and finalizes the deposit PSBT.
    pub fn build<S: PsbtSigner + ?Sized>(&self, signer: &S) -> Result<BuiltTransaction, TransferError> {
        let params = self.build_params()?;
        Ok(build_transaction(&params, signer)?)
    }
}

#[cfg(test)]
mod tests {
    use bitcoin::{
        key::CompressedPublicKey,
        secp256k1::{Secp256k1, SecretKey},
        Txid,
    };
    use xchain_btc::KeypairSigner;
    use xchain_registry::test_utils::{
        sample_registry, BTC_DEPOSIT_ADDRESS, BTC_DOMAIN, BTC_FEE_ADDRESS, BTC_RESOURCE,
        SEPOLIA_DOMAIN,
    };

    use super::*;

    const RECIPIENT: &str = "0x742d35cc6634c0532925a3b844bc454e4438f44e";

    fn secret() -> SecretKey {
        SecretKey::from_slice(&[0x11; 32]).unwrap()
    }

    fn change_address(key: PublicKey) -> String {
        Address::p2wpkh(&CompressedPublicKey(key), BitcoinNetwork::Testnet).to_string()
    }

    #[test]
    fn test_builds_deposit_to_resource_addresses() {
        let registry = sample_registry();
        let route = registry
            .resolve_route(BTC_DOMAIN, SEPOLIA_DOMAIN, BTC_RESOURCE)
            .unwrap();
        let public_key = PublicKey::from_secret_key(&Secp256k1::new(), &secret());

        let transfer = BitcoinTransfer {
            transfer: FungibleTransfer::new(route, "", RECIPIENT, 40_000).unwrap(),
            utxos: vec![UtxoData {
                txid: "ab".repeat(32).parse::<Txid>().unwrap(),
                vout: 0,
                value: Amount::from_sat(100_000),
            }],
            public_key,
            address_type: AddressType::P2wpkh,
            fee_rate: 2,
            change_address: change_address(public_key),
            network: BitcoinNetwork::Testnet,
        };

        let params = transfer.build_params().unwrap();
        assert_eq!(params.deposit_address.to_string(), BTC_DEPOSIT_ADDRESS);
        assert_eq!(params.fee_address.to_string(), BTC_FEE_ADDRESS);
        assert_eq!(params.destination_domain.get(), SEPOLIA_DOMAIN);

        let built = transfer.build(&KeypairSigner::new(secret())).unwrap();
        let outputs = &built.transaction.output;
        assert_eq!(outputs[1].script_pubkey, params.deposit_address.script_pubkey());
        assert_eq!(outputs[2].script_pubkey, params.fee_address.script_pubkey());
        assert_eq!(outputs[2].value, built.fee);
    }

    #[test]
    fn test_rejects_address_from_other_network() {
        let registry = sample_registry();
        let route = registry
            .resolve_route(BTC_DOMAIN, SEPOLIA_DOMAIN, BTC_RESOURCE)
            .unwrap();
        let public_key = PublicKey::from_secret_key(&Secp256k1::new(), &secret());
        let transfer = BitcoinTransfer {
            transfer: FungibleTransfer::new(route, "", RECIPIENT, 40_000).unwrap(),
            utxos: Vec::new(),
            public_key,
            address_type: AddressType::P2tr,
            fee_rate: 1,
            change_address: change_address(public_key),
            network: BitcoinNetwork::Bitcoin,
        };
        assert!(matches!(
            transfer.build_params(),
            Err(TransferError::InvalidAddress {
                network: Network::Bitcoin,
                ..
            })
        ));
    }
}
