use crate::amount::parse_units;
use crate::config::{ClientConfig, TokenInfo, DEFAULT_DECIMALS, DEFAULT_FEE_TIER, DEFAULT_SLIPPAGE_BPS};
use crate::display::{fee_summary, first_line, short_address, slippage_summary, tx_link};
use crate::ens::{lookup_name, NameLookup, NameResolver};
use crate::error::ClientError;
use crate::tx::{TxKind, TxStatus};
use crate::wallet::{ContractCall, ReceiptStatus, WalletSigner};
use tracing::{debug, info, warn};

/// Editable fields of the swap card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapForm {
    pub name: String,
    pub token_in: String,
    pub token_out: String,
    pub amount: String,
    pub fee_tier: u32,
    pub slippage: String,
}

/// View state and actions of the swap page, minus rendering.
pub struct SwapController<W, R> {
    config: ClientConfig,
    tokens: Vec<TokenInfo>,
    wallet: W,
    resolver: R,
    form: SwapForm,
    lookup: NameLookup,
    approve_tx: TxStatus,
    swap_tx: TxStatus,
    local_error: Option<String>,
}

impl<W, R> SwapController<W, R>
where
    W: WalletSigner,
    R: NameResolver,
{
    pub fn new(config: ClientConfig, wallet: W, resolver: R) -> Self {
        let tokens = config.tokens();
        let form = SwapForm {
            name: String::new(),
            token_in: tokens[0].address.clone(),
            token_out: tokens[1].address.clone(),
            amount: String::new(),
            fee_tier: DEFAULT_FEE_TIER,
            slippage: DEFAULT_SLIPPAGE_BPS.to_string(),
        };
        Self {
            config,
            tokens,
            wallet,
            resolver,
            form,
            lookup: NameLookup::Idle,
            approve_tx: TxStatus::Idle,
            swap_tx: TxStatus::Idle,
            local_error: None,
        }
    }

    pub fn form(&self) -> &SwapForm {
        &self.form
    }

    pub fn tokens(&self) -> &[TokenInfo] {
        &self.tokens
    }

    pub fn lookup(&self) -> &NameLookup {
        &self.lookup
    }

    pub fn tx_status(&self, kind: TxKind) -> &TxStatus {
        match kind {
            TxKind::Approve => &self.approve_tx,
            TxKind::Swap => &self.swap_tx,
        }
    }

    fn tx_status_mut(&mut self, kind: TxKind) -> &mut TxStatus {
        match kind {
            TxKind::Approve => &mut self.approve_tx,
            TxKind::Swap => &mut self.swap_tx,
        }
    }

    /// Typing a name does not resolve it; see [`Self::resolve`].
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_token_in(&mut self, address: impl Into<String>) {
        self.form.token_in = address.into();
    }

    pub fn set_token_out(&mut self, address: impl Into<String>) {
        self.form.token_out = address.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.form.amount = amount.into();
    }

    pub fn set_fee_tier(&mut self, fee_tier: u32) {
        self.form.fee_tier = fee_tier;
    }

    pub fn set_slippage(&mut self, slippage: impl Into<String>) {
        self.form.slippage = slippage.into();
    }

    fn token_in_decimals(&self) -> u32 {
        self.tokens
            .iter()
            .find(|t| t.address == self.form.token_in)
            .map_or(DEFAULT_DECIMALS, |t| t.decimals)
    }

    pub fn can_resolve(&self) -> bool {
        !self.form.name.is_empty() && !self.lookup.is_resolving()
    }

    pub fn can_approve(&self) -> bool {
        !self.form.amount.is_empty() && !self.approve_tx.is_pending()
    }

    /// Swap waits for a pending approval too
    pub fn can_swap(&self) -> bool {
        !self.form.amount.is_empty() && !self.approve_tx.is_pending() && !self.swap_tx.is_pending()
    }

    /// Resolve the typed name and pre-fill slippage and fee from its records.
    pub async fn resolve(&mut self) {
        if !self.can_resolve() {
            return;
        }
        let name = self.form.name.clone();
        self.lookup = NameLookup::Resolving { name: name.clone() };
        debug!(%name, "resolving name");

        self.lookup = lookup_name(&self.resolver, &name).await;

        if let NameLookup::Resolved { preferences, .. } = &self.lookup {
            match preferences.slippage_bps() {
                Some(bps) => self.form.slippage = bps.to_string(),
                None if preferences.slippage.is_some() => {
                    warn!(slippage = ?preferences.slippage, "ignoring malformed slippage record");
                }
                None => {}
            }
            match preferences.fee_tier() {
                Some(fee_tier) => self.form.fee_tier = fee_tier,
                None if preferences.fee.is_some() => {
                    warn!(fee = ?preferences.fee, "ignoring malformed fee record");
                }
                None => {}
            }
        }
    }

    /// Grant the settlement contract an allowance of the form amount.
    pub async fn approve(&mut self) {
        if !self.can_approve() {
            return;
        }
        self.local_error = None;

        let amount = match parse_units(&self.form.amount, self.token_in_decimals()) {
            Ok(amount) => amount,
            Err(e) => return self.set_local_error(e),
        };

        let call = ContractCall::Approve {
            token: self.form.token_in.clone(),
            spender: self.config.contract_address.clone(),
            amount,
        };
        self.send(TxKind::Approve, call).await;
    }

    pub async fn swap(&mut self) {
        if !self.can_swap() {
            return;
        }
        self.local_error = None;

        let amount_in = match parse_units(&self.form.amount, self.token_in_decimals()) {
            Ok(amount) => amount,
            Err(e) => return self.set_local_error(e),
        };
        let slippage_bps = match self.form.slippage.trim().parse::<u32>() {
            Ok(bps) => bps,
            Err(_) => {
                return self.set_local_error(ClientError::InvalidSlippage {
                    value: self.form.slippage.clone(),
                })
            }
        };

        let call = ContractCall::Swap {
            contract: self.config.contract_address.clone(),
            token_in: self.form.token_in.clone(),
            token_out: self.form.token_out.clone(),
            amount_in,
            fee_tier: self.form.fee_tier,
            slippage_bps,
        };
        self.send(TxKind::Swap, call).await;
    }

    fn set_local_error(&mut self, error: ClientError) {
        warn!(error = %error, "rejected form input");
        self.local_error = Some(error.to_string());
    }

    async fn send(&mut self, kind: TxKind, call: ContractCall) {
        if let Err(e) = self.tx_status_mut(kind).begin() {
            warn!(?kind, error = %e, "submission ignored");
            return;
        }
        info!(?kind, function = call.function_name(), contract = call.target(), "awaiting signature");

        let hash = match self.wallet.submit(call).await {
            Ok(hash) => hash,
            Err(e) => return self.record_failure(kind, e),
        };
        info!(?kind, %hash, "transaction submitted");
        if let Err(e) = self.tx_status_mut(kind).signed(hash.clone()) {
            return self.record_failure(kind, e);
        }

        match self.wallet.wait_for_receipt(&hash).await {
            Ok(ReceiptStatus::Success) => {
                info!(?kind, %hash, "transaction confirmed");
                if let Err(e) = self.tx_status_mut(kind).confirmed() {
                    self.record_failure(kind, e);
                }
            }
            Ok(ReceiptStatus::Reverted) => self.record_failure(
                kind,
                ClientError::Wallet {
                    message: format!("Transaction {hash} reverted"),
                },
            ),
            Err(e) => self.record_failure(kind, e),
        }
    }

    fn record_failure(&mut self, kind: TxKind, error: ClientError) {
        let message = error.to_string();
        warn!(?kind, error = %first_line(&message), "transaction failed");
        let status = self.tx_status_mut(kind);
        if status.fail(message.clone()).is_err() {
            *status = TxStatus::Failed { message };
        }
    }

    /// Local input error first, then the approve failure, then the swap failure.
    pub fn error_message(&self) -> Option<&str> {
        if let Some(local) = &self.local_error {
            return Some(local.as_str());
        }
        self.approve_tx
            .error()
            .or_else(|| self.swap_tx.error())
            .map(first_line)
    }

    pub fn approve_label(&self) -> &'static str {
        self.approve_tx.button_label(TxKind::Approve)
    }

    pub fn swap_label(&self) -> &'static str {
        self.swap_tx.button_label(TxKind::Swap)
    }

    pub fn swap_tx_link(&self) -> Option<String> {
        self.swap_tx
            .hash()
            .map(|hash| tx_link(&self.config.explorer_tx_url, hash))
    }

    pub fn swap_confirmed_message(&self) -> Option<&'static str> {
        matches!(self.swap_tx, TxStatus::Confirmed { .. }).then_some("Swap confirmed!")
    }

    /// Lines shown under the name field after a successful lookup
    pub fn resolved_lines(&self) -> Vec<String> {
        let NameLookup::Resolved {
            address,
            preferences,
            ..
        } = &self.lookup
        else {
            return Vec::new();
        };
        let mut lines = vec![format!("Resolved: {}", short_address(address))];
        if let Some(slippage) = &preferences.slippage {
            lines.push(format!("Slippage: {}", slippage_summary(slippage)));
        }
        if let Some(fee) = &preferences.fee {
            lines.push(format!("Fee tier: {}", fee_summary(fee)));
        }
        lines
    }

    /// "Could not resolve ENS name." once a lookup came back empty
    pub fn lookup_error(&self) -> Option<&'static str> {
        matches!(self.lookup, NameLookup::NotFound { .. }).then_some("Could not resolve ENS name.")
    }
}
