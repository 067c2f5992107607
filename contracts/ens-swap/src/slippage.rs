use crate::error::EnsSwapError;

/// Basis points in 100%
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Minimum output accepted for `amount_in` at `slippage_bps` tolerance:
/// `amount_in * (10000 - slippage_bps) / 10000`, rounded down.
///
/// The floor is inclusive, a swap paying exactly this amount succeeds.
pub fn min_amount_out(amount_in: i128, slippage_bps: u32) -> Result<i128, EnsSwapError> {
    if amount_in < 0 {
        return Err(EnsSwapError::NegativeNotAllowed);
    }
    if slippage_bps > BPS_DENOMINATOR {
        return Err(EnsSwapError::InvalidSlippage);
    }

    let kept_bps = i128::from(BPS_DENOMINATOR - slippage_bps);
    amount_in
        .checked_mul(kept_bps)
        .map(|scaled| scaled / i128::from(BPS_DENOMINATOR))
        .ok_or(EnsSwapError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: i128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_fifty_bps_on_one_token() {
        assert_eq!(min_amount_out(ONE, 50), Ok(995_000_000_000_000_000));
    }

    #[test]
    fn test_one_percent() {
        assert_eq!(min_amount_out(ONE, 100), Ok(990_000_000_000_000_000));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(min_amount_out(ONE, 0), Ok(ONE));
        assert_eq!(min_amount_out(ONE, 10_000), Ok(0));
        assert_eq!(min_amount_out(ONE, 10_001), Err(EnsSwapError::InvalidSlippage));
    }

    #[test]
    fn test_rounds_down() {
        // 999 * 9950 / 10000 = 994.005
        assert_eq!(min_amount_out(999, 50), Ok(994));
        assert_eq!(min_amount_out(0, 50), Ok(0));
    }

    #[test]
    fn test_rejects_bad_amounts() {
        assert_eq!(min_amount_out(-1, 50), Err(EnsSwapError::NegativeNotAllowed));
        assert_eq!(min_amount_out(i128::MAX, 50), Err(EnsSwapError::ArithmeticOverflow));
    }
}
