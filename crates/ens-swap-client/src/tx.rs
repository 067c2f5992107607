//! Per-transaction state machine shared by the approve and swap buttons.
//!
//! ```text
//! Idle -> AwaitingSignature -> Confirming -> Confirmed
//!              |                   |
//!              +------> Failed <---+
//! ```
//!
//! `Confirmed` and `Failed` are terminal; a new submission starts over.

use crate::error::{ClientError, Result};
use crate::wallet::TxHash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Approve,
    Swap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TxStatus {
    #[default]
    Idle,
    AwaitingSignature,
    Confirming {
        hash: TxHash,
    },
    Confirmed {
        hash: TxHash,
    },
    Failed {
        message: String,
    },
}

impl TxStatus {
    fn name(&self) -> &'static str {
        match self {
            TxStatus::Idle => "idle",
            TxStatus::AwaitingSignature => "awaiting-signature",
            TxStatus::Confirming { .. } => "confirming",
            TxStatus::Confirmed { .. } => "confirmed",
            TxStatus::Failed { .. } => "failed",
        }
    }

    /// Awaiting a signature or a receipt
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            TxStatus::AwaitingSignature | TxStatus::Confirming { .. }
        )
    }

    pub fn hash(&self) -> Option<&TxHash> {
        match self {
            TxStatus::Confirming { hash } | TxStatus::Confirmed { hash } => Some(hash),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TxStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn begin(&mut self) -> Result<()> {
        if self.is_pending() {
            return Err(self.invalid("awaiting-signature"));
        }
        *self = TxStatus::AwaitingSignature;
        Ok(())
    }

    pub fn signed(&mut self, hash: TxHash) -> Result<()> {
        if *self != TxStatus::AwaitingSignature {
            return Err(self.invalid("confirming"));
        }
        *self = TxStatus::Confirming { hash };
        Ok(())
    }

    pub fn confirmed(&mut self) -> Result<()> {
        match std::mem::take(self) {
            TxStatus::Confirming { hash } => {
                *self = TxStatus::Confirmed { hash };
                Ok(())
            }
            other => {
                let err = other.invalid("confirmed");
                *self = other;
                Err(err)
            }
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<()> {
        if !self.is_pending() {
            return Err(self.invalid("failed"));
        }
        *self = TxStatus::Failed {
            message: message.into(),
        };
        Ok(())
    }

    fn invalid(&self, to: &'static str) -> ClientError {
        ClientError::InvalidTransition {
            from: self.name(),
            to,
        }
    }

    pub fn button_label(&self, kind: TxKind) -> &'static str {
        match (kind, self) {
            (_, TxStatus::AwaitingSignature) => "Confirm in wallet...",
            (TxKind::Approve, TxStatus::Confirming { .. }) => "Approving...",
            (TxKind::Approve, TxStatus::Confirmed { .. }) => "Approved",
            (TxKind::Approve, _) => "Approve",
            (TxKind::Swap, TxStatus::Confirming { .. }) => "Swapping...",
            (TxKind::Swap, _) => "Swap",
        }
    }
}
