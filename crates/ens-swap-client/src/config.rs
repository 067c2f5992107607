use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_RPC_URL: &str = "https://eth-sepolia.g.alchemy.com/v2/";
pub const DEFAULT_EXPLORER_TX_URL: &str = "https://sepolia.etherscan.io/tx/";
/// Sepolia, where name lookups are performed
pub const DEFAULT_CHAIN_ID: u64 = 11_155_111;

pub const DEFAULT_DECIMALS: u32 = 18;
pub const DEFAULT_FEE_TIER: u32 = 3000;
pub const DEFAULT_SLIPPAGE_BPS: &str = "50";

const USDC_ADDRESS: &str = "0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenInfo {
    pub label: String,
    pub address: String,
    pub decimals: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeTier {
    pub label: &'static str,
    pub value: u32,
}

pub const FEE_TIERS: [FeeTier; 3] = [
    FeeTier {
        label: "0.05%",
        value: 500,
    },
    FeeTier {
        label: "0.3%",
        value: 3000,
    },
    FeeTier {
        label: "1%",
        value: 10000,
    },
];

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_explorer_tx_url() -> String {
    DEFAULT_EXPLORER_TX_URL.to_string()
}

fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Deployed settlement contract, also the `approve` spender
    pub contract_address: String,
    #[serde(default)]
    pub token_in: String,
    #[serde(default)]
    pub token_out: String,
    pub wallet_connect_project_id: String,
    pub rpc_api_key: String,
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "default_explorer_tx_url")]
    pub explorer_tx_url: String,
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| ClientError::Config {
                message: format!("{key} environment variable is required"),
            })
        };

        let config = Self {
            contract_address: required("ENS_SWAP_CONTRACT_ADDRESS")?,
            token_in: lookup("ENS_SWAP_TOKEN_IN").unwrap_or_default(),
            token_out: lookup("ENS_SWAP_TOKEN_OUT").unwrap_or_default(),
            wallet_connect_project_id: required("WALLETCONNECT_PROJECT_ID")?,
            rpc_api_key: required("RPC_API_KEY")?,
            rpc_url: lookup("ENS_SWAP_RPC_URL").unwrap_or_else(default_rpc_url),
            explorer_tx_url: lookup("ENS_SWAP_EXPLORER_TX_URL")
                .unwrap_or_else(default_explorer_tx_url),
            chain_id: match lookup("ENS_SWAP_CHAIN_ID") {
                Some(raw) => raw.parse().map_err(|_| ClientError::Config {
                    message: format!("ENS_SWAP_CHAIN_ID is not a number: {raw}"),
                })?,
                None => DEFAULT_CHAIN_ID,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ClientError::Config {
            message: format!("TOML parsing error: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("contract_address", &self.contract_address),
            ("wallet_connect_project_id", &self.wallet_connect_project_id),
            ("rpc_api_key", &self.rpc_api_key),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ClientError::Config {
                    message: format!("{field} must not be empty"),
                });
            }
        }
        Ok(())
    }

    /// Transport URL with the API key appended
    pub fn rpc_endpoint(&self) -> String {
        format!("{}{}", self.rpc_url, self.rpc_api_key)
    }

    /// Selectable tokens: the configured pair first, then USDC.
    pub fn tokens(&self) -> Vec<TokenInfo> {
        vec![
            TokenInfo {
                label: "WETH".to_string(),
                address: self.token_in.clone(),
                decimals: 18,
            },
            TokenInfo {
                label: "UNI".to_string(),
                address: self.token_out.clone(),
                decimals: 18,
            },
            TokenInfo {
                label: "USDC".to_string(),
                address: USDC_ADDRESS.to_string(),
                decimals: 6,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("ENS_SWAP_CONTRACT_ADDRESS", "0xswap"),
        ("WALLETCONNECT_PROJECT_ID", "project"),
        ("RPC_API_KEY", "secret"),
    ];

    #[test]
    fn from_lookup_applies_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(config.contract_address, "0xswap");
        assert_eq!(config.token_in, "");
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(config.explorer_tx_url, DEFAULT_EXPLORER_TX_URL);
        assert_eq!(
            config.rpc_endpoint(),
            "https://eth-sepolia.g.alchemy.com/v2/secret"
        );
    }

    #[test]
    fn from_lookup_requires_contract_address() {
        let err = ClientConfig::from_lookup(lookup_from(&REQUIRED[1..])).unwrap_err();

        assert!(err.to_string().contains("ENS_SWAP_CONTRACT_ADDRESS"));
    }

    #[test]
    fn from_lookup_rejects_bad_chain_id() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("ENS_SWAP_CHAIN_ID", "sepolia"));

        assert!(ClientConfig::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn from_toml_str_parses_overrides() {
        let config = ClientConfig::from_toml_str(
            r#"
            contract_address = "0xswap"
            token_in = "0xweth"
            token_out = "0xuni"
            wallet_connect_project_id = "project"
            rpc_api_key = "secret"
            explorer_tx_url = "https://explorer.local/tx/"
            "#,
        )
        .unwrap();

        assert_eq!(config.explorer_tx_url, "https://explorer.local/tx/");
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);

        let tokens = config.tokens();
        assert_eq!(tokens[0].address, "0xweth");
        assert_eq!(tokens[1].label, "UNI");
        assert_eq!(tokens[2].decimals, 6);
    }

    #[test]
    fn from_toml_str_rejects_empty_required_field() {
        let result = ClientConfig::from_toml_str(
            r#"
            contract_address = ""
            wallet_connect_project_id = "project"
            rpc_api_key = "secret"
            "#,
        );

        assert!(matches!(result, Err(ClientError::Config { .. })));
    }

    #[test]
    fn fee_tiers_include_default() {
        assert!(FEE_TIERS.iter().any(|t| t.value == DEFAULT_FEE_TIER));
    }
}
