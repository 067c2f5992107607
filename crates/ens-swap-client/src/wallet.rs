use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

/// A write call the wallet is asked to sign and broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    /// `approve(spender, amount)` on `token`
    Approve {
        token: String,
        spender: String,
        amount: i128,
    },
    /// `swap(token_in, token_out, amount_in, fee_tier, slippage_bps)` on `contract`
    Swap {
        contract: String,
        token_in: String,
        token_out: String,
        amount_in: i128,
        fee_tier: u32,
        slippage_bps: u32,
    },
}

impl ContractCall {
    pub fn function_name(&self) -> &'static str {
        match self {
            ContractCall::Approve { .. } => "approve",
            ContractCall::Swap { .. } => "swap",
        }
    }

    /// Contract the call is addressed to
    pub fn target(&self) -> &str {
        match self {
            ContractCall::Approve { token, .. } => token,
            ContractCall::Swap { contract, .. } => contract,
        }
    }
}

/// Signing and broadcasting, provided by the wallet library.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Ask the user to sign `call` and broadcast it. Resolves once signed.
    async fn submit(&self, call: ContractCall) -> Result<TxHash>;

    /// Wait until `hash` is included in a block.
    async fn wait_for_receipt(&self, hash: &TxHash) -> Result<ReceiptStatus>;
}
