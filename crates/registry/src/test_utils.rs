//! Shared bridge configuration fixture for tests across the workspace.

use xchain_config::BridgeConfig;

use crate::Registry;

pub const SEPOLIA_DOMAIN: u8 = 1;
pub const HOLESKY_DOMAIN: u8 = 2;
pub const RHALA_DOMAIN: u8 = 3;
pub const BTC_DOMAIN: u8 = 4;

pub const SEPOLIA_CAIP: &str = "eip155:11155111";
pub const BTC_CAIP: &str = "bip122:000000000933ea01ad0ee984209779ba";

pub const ERC20_RESOURCE: &str = "0x0000000000000000000000000000000000000000000000000000000000000300";
pub const NATIVE_RESOURCE: &str = "0x0000000000000000000000000000000000000000000000000000000000000002";
pub const BURNABLE_RESOURCE: &str = "0x0000000000000000000000000000000000000000000000000000000000000600";
pub const GENERIC_RESOURCE: &str = "0x0000000000000000000000000000000000000000000000000000000000000500";
pub const BTC_RESOURCE: &str = "0x0000000000000000000000000000000000000000000000000000000000000700";
pub const UNKNOWN_RESOURCE: &str = "0x0000000000000000000000000000000000000000000000000000000000000999";

pub const SEPOLIA_BRIDGE: &str = "0x4cf326d3817558038d1def9e76b727202c3e8492";
pub const FEE_ROUTER: &str = "0x1ccb4231f2ff299e1e049de76f0a1d2b415c563a";
pub const BASIC_FEE_HANDLER: &str = "0x8f5a9a1c5c4e8c1a9fe4d2e1a7b3c6d5e4f3a2b1";
pub const PERCENTAGE_FEE_HANDLER: &str = "0x9a2e1c7d0b3f4a5e6d7c8b9a0f1e2d3c4b5a6978";
pub const TWAP_FEE_HANDLER: &str = "0xe4951a0b2c3d4e5f60718293a4b5c6d7e8f90123";
pub const ERC20_HANDLER: &str = "0x02091eef6e35865f5b4e2f1b7a1c2d3e4f506172";
pub const GENERIC_HANDLER: &str = "0xe837d42dd3c685839a418886f418769bdd23546b";
pub const ERC20_TOKEN: &str = "0x7d58589b6c1ba455c4060a3563b9a0d447bd4a6a";
pub const BURNABLE_TOKEN: &str = "0x3f9a68fd0a16bf6d4bfb8b4c1e5e9f2b7a1d2c3e";

pub const RHALA_BRIDGE: &str = "sygmaBridge";
pub const RHALA_FEE_ROUTER: &str = "sygmaFeeHandlerRouter";
pub const RHALA_BASIC_FEE_HANDLER: &str = "sygmaBasicFeeHandler";
pub const RHALA_PERCENTAGE_FEE_HANDLER: &str = "sygmaPercentageFeeHandler";

/// Testnet P2TR deposit address of the bitcoin resource.
pub const BTC_DEPOSIT_ADDRESS: &str =
    "tb1pqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesf3hn0c";
/// Testnet P2WPKH fee collection address of the bitcoin resource.
pub const BTC_FEE_ADDRESS: &str = "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx";

/// Sepolia and Holesky (EVM), Rhala (Substrate) and Bitcoin testnet.
pub const SAMPLE_CONFIG_JSON: &str = r#"
    {
        "domains": [
            {
                "id": 1,
                "type": "evm",
                "caipId": "eip155:11155111",
                "name": "sepolia",
                "bridge": "0x4cf326d3817558038d1def9e76b727202c3e8492",
                "feeRouter": "0x1ccb4231f2ff299e1e049de76f0a1d2b415c563a",
                "feeHandlers": [
                    { "address": "0x8f5a9a1c5c4e8c1a9fe4d2e1a7b3c6d5e4f3a2b1", "type": "basic" },
                    { "address": "0x9a2e1c7d0b3f4a5e6d7c8b9a0f1e2d3c4b5a6978", "type": "percentage" },
                    { "address": "0xe4951a0b2c3d4e5f60718293a4b5c6d7e8f90123", "type": "twap" }
                ],
                "handlers": [
                    { "type": "fungible", "address": "0x02091eef6e35865f5b4e2f1b7a1c2d3e4f506172" },
                    { "type": "permissionlessGeneric", "address": "0xe837d42dd3c685839a418886f418769bdd23546b" }
                ],
                "nativeTokenSymbol": "eth",
                "nativeTokenDecimals": 18,
                "resources": [
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000300", "type": "fungible", "address": "0x7d58589b6c1ba455c4060a3563b9a0d447bd4a6a", "symbol": "ERC20LRTest", "decimals": 18 },
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000002", "type": "fungible", "native": true, "symbol": "eth", "decimals": 18 },
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000600", "type": "fungible", "address": "0x3f9a68fd0a16bf6d4bfb8b4c1e5e9f2b7a1d2c3e", "burnable": true, "decimals": 18 },
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000500", "type": "permissionlessGeneric" },
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000700", "type": "fungible", "address": "0x3f9a68fd0a16bf6d4bfb8b4c1e5e9f2b7a1d2c3e", "burnable": true, "symbol": "sygBTC", "decimals": 8 }
                ]
            },
            {
                "id": 2,
                "type": "evm",
                "caipId": "eip155:17000",
                "name": "holesky",
                "bridge": "0x5a1c3e5d7f9b0a2c4e6f8a0b2c4d6e8f0a1b3c5d",
                "feeRouter": "0x1ccb4231f2ff299e1e049de76f0a1d2b415c563a",
                "feeHandlers": [
                    { "address": "0x8f5a9a1c5c4e8c1a9fe4d2e1a7b3c6d5e4f3a2b1", "type": "basic" },
                    { "address": "0x9a2e1c7d0b3f4a5e6d7c8b9a0f1e2d3c4b5a6978", "type": "percentage" },
                    { "address": "0xe4951a0b2c3d4e5f60718293a4b5c6d7e8f90123", "type": "twap" }
                ],
                "handlers": [
                    { "type": "fungible", "address": "0x02091eef6e35865f5b4e2f1b7a1c2d3e4f506172" },
                    { "type": "permissionlessGeneric", "address": "0xe837d42dd3c685839a418886f418769bdd23546b" }
                ],
                "nativeTokenSymbol": "eth",
                "nativeTokenDecimals": 18,
                "resources": [
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000300", "type": "fungible", "address": "0x7d58589b6c1ba455c4060a3563b9a0d447bd4a6a", "symbol": "ERC20LRTest", "decimals": 18 },
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000002", "type": "fungible", "native": true, "symbol": "eth", "decimals": 18 },
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000600", "type": "fungible", "address": "0x3f9a68fd0a16bf6d4bfb8b4c1e5e9f2b7a1d2c3e", "burnable": true, "decimals": 18 },
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000500", "type": "permissionlessGeneric" },
                    { "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000700", "type": "fungible", "address": "0x3f9a68fd0a16bf6d4bfb8b4c1e5e9f2b7a1d2c3e", "burnable": true, "symbol": "sygBTC", "decimals": 8 }
                ]
            },
            {
                "id": 3,
                "type": "substrate",
                "caipId": "polkadot:5f551688012d25a98e729752169f509c",
                "name": "rhala",
                "bridge": "sygmaBridge",
                "feeRouter": "sygmaFeeHandlerRouter",
                "feeHandlers": [
                    { "address": "sygmaBasicFeeHandler", "type": "basic" },
                    { "address": "sygmaPercentageFeeHandler", "type": "percentage" }
                ],
                "handlers": [{ "type": "fungible", "address": "sygmaBridge" }],
                "nativeTokenSymbol": "pha",
                "nativeTokenDecimals": 12,
                "resources": [{
                    "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000300",
                    "type": "fungible",
                    "assetID": 2000,
                    "assetName": "USDC",
                    "xcmMultiAssetId": {
                        "concrete": {
                            "parents": 1,
                            "interior": { "x3": [{ "parachain": 2004 }, { "generalKey": "0x7379676d61" }, { "generalKey": "0x75736463" }] }
                        }
                    },
                    "decimals": 12
                }]
            },
            {
                "id": 4,
                "type": "btc",
                "caipId": "bip122:000000000933ea01ad0ee984209779ba",
                "name": "bitcoin-testnet",
                "nativeTokenSymbol": "btc",
                "nativeTokenDecimals": 8,
                "resources": [{
                    "resourceId": "0x0000000000000000000000000000000000000000000000000000000000000700",
                    "type": "fungible",
                    "native": true,
                    "address": "tb1pqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesf3hn0c",
                    "feeAddress": "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx",
                    "feeAmount": 1000000,
                    "decimals": 8
                }]
            }
        ]
    }
"#;

pub fn sample_config() -> BridgeConfig {
    BridgeConfig::from_json_str(SAMPLE_CONFIG_JSON).expect("sample config is valid")
}

pub fn sample_registry() -> Registry {
    Registry::new(sample_config())
}
