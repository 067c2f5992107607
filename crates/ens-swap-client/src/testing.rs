//! In-memory wallet and resolver used by the unit tests.

use crate::config::ClientConfig;
use crate::ens::NameResolver;
use crate::error::{ClientError, Result};
use crate::wallet::{ContractCall, ReceiptStatus, TxHash, WalletSigner};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn test_config() -> ClientConfig {
    ClientConfig {
        contract_address: "0xswap".to_string(),
        token_in: "0xweth".to_string(),
        token_out: "0xuni".to_string(),
        wallet_connect_project_id: "project".to_string(),
        rpc_api_key: "secret".to_string(),
        rpc_url: "https://rpc.local/".to_string(),
        explorer_tx_url: "https://explorer.local/tx/".to_string(),
        chain_id: 11_155_111,
    }
}

#[derive(Clone, Default)]
pub struct FakeWallet {
    calls: Arc<Mutex<Vec<ContractCall>>>,
    reject_with: Option<String>,
    revert: bool,
}

impl FakeWallet {
    pub fn rejecting(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn reverting() -> Self {
        Self {
            revert: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletSigner for FakeWallet {
    async fn submit(&self, call: ContractCall) -> Result<TxHash> {
        if let Some(message) = &self.reject_with {
            return Err(ClientError::Wallet {
                message: message.clone(),
            });
        }
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        Ok(TxHash(format!("0xhash{}", calls.len())))
    }

    async fn wait_for_receipt(&self, _hash: &TxHash) -> Result<ReceiptStatus> {
        if self.revert {
            Ok(ReceiptStatus::Reverted)
        } else {
            Ok(ReceiptStatus::Success)
        }
    }
}

#[derive(Default)]
pub struct FakeResolver {
    addresses: HashMap<String, String>,
    texts: HashMap<(String, String), String>,
    broken: bool,
}

impl FakeResolver {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn with_address(mut self, name: &str, address: &str) -> Self {
        self.addresses.insert(name.to_string(), address.to_string());
        self
    }

    pub fn with_text(mut self, name: &str, key: &str, value: &str) -> Self {
        self.texts
            .insert((name.to_string(), key.to_string()), value.to_string());
        self
    }

    fn check(&self) -> Result<()> {
        if self.broken {
            Err(ClientError::Resolver {
                message: "rpc unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl NameResolver for FakeResolver {
    async fn resolve_address(&self, name: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.addresses.get(name).cloned())
    }

    async fn text_record(&self, name: &str, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self
            .texts
            .get(&(name.to_string(), key.to_string()))
            .cloned())
    }
}
