//! Decimal string <-> base unit conversion without floats.

use crate::error::{ClientError, Result};

fn invalid(message: impl Into<String>) -> ClientError {
    ClientError::InvalidAmount {
        message: message.into(),
    }
}

/// Parse a UI amount such as `"1.5"` into token base units.
///
/// The result is `i128` because that is the token amount type the
/// settlement contract takes.
pub fn parse_units(s: &str, decimals: u32) -> Result<i128> {
    let s = s.trim();
    if s.is_empty() {
        return Err(invalid("empty amount"));
    }
    if s.starts_with('-') {
        return Err(invalid("amount must be non-negative"));
    }

    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid(format!("cannot parse {s:?}")));
    }
    if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid(format!("cannot parse {s:?}")));
    }
    if frac.len() > decimals as usize {
        return Err(invalid(format!(
            "too many decimal places for token (decimals={decimals})"
        )));
    }

    let scale = 10_i128
        .checked_pow(decimals)
        .ok_or_else(|| invalid("decimals too large"))?;

    let whole_v: i128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid("amount overflow"))?
    };
    let frac_v: i128 = if frac.is_empty() {
        0
    } else {
        let padded = format!("{frac:0<width$}", width = decimals as usize);
        padded.parse().map_err(|_| invalid("amount overflow"))?
    };

    whole_v
        .checked_mul(scale)
        .and_then(|x| x.checked_add(frac_v))
        .ok_or_else(|| invalid("amount overflow"))
}

/// Format a base-unit amount as a trimmed decimal string.
///
/// - base=1500000, decimals=6 => "1.5"
/// - base=50, decimals=2 => "0.5"
pub fn format_units(base: u128, decimals: u32) -> String {
    let Some(scale) = 10_u128.checked_pow(decimals) else {
        return base.to_string();
    };
    if decimals == 0 {
        return base.to_string();
    }
    let whole = base / scale;
    let frac = base % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac_s = format!("{frac:0width$}", width = decimals as usize);
    format!("{whole}.{}", frac_s.trim_end_matches('0'))
}
