//! # ENS Swap Client
//!
//! Host-side controller for the swap page: form state, name-record defaults,
//! and the approve/swap transaction lifecycles. Signing and name resolution
//! are supplied by the embedding application through [`WalletSigner`] and
//! [`NameResolver`].

pub mod amount;
pub mod config;
pub mod controller;
pub mod display;
pub mod ens;
pub mod error;
pub mod logging;
pub mod tx;
pub mod wallet;

#[cfg(test)]
mod testing;

pub use config::{ClientConfig, FeeTier, TokenInfo, FEE_TIERS};
pub use controller::{SwapController, SwapForm};
pub use ens::{NameLookup, NamePreferences, NameResolver};
pub use error::{ClientError, Result};
pub use tx::{TxKind, TxStatus};
pub use wallet::{ContractCall, ReceiptStatus, TxHash, WalletSigner};
