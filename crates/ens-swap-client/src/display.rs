use crate::amount::format_units;
use crate::wallet::TxHash;

/// `0x1234...abcd`: first 6 and last 4 characters.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// `"50 bps (0.5%)"`; the percentage is dropped if `raw` is not a number.
pub fn slippage_summary(raw: &str) -> String {
    match raw.trim().parse::<u128>() {
        Ok(bps) => format!("{raw} bps ({}%)", format_units(bps, 2)),
        Err(_) => format!("{raw} bps"),
    }
}

/// `"3000 (0.3%)"`; fee tiers are in hundredths of a basis point.
pub fn fee_summary(raw: &str) -> String {
    match raw.trim().parse::<u128>() {
        Ok(fee) => format!("{raw} ({}%)", format_units(fee, 4)),
        Err(_) => raw.to_string(),
    }
}

/// Wallet and RPC errors carry multi-line details; only the headline is shown.
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}

pub fn tx_link(explorer_tx_url: &str, hash: &TxHash) -> String {
    format!("{explorer_tx_url}{hash}")
}
