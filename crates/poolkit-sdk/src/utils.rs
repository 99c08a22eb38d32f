//! Amount helpers

use poolkit_core::BPS_DENOMINATOR;

use crate::error::{SdkError, SdkResult};

/// Calculate amount with slippage
pub fn amount_with_slippage(amount: u128, slippage_bps: u16, is_min: bool) -> SdkResult<u128> {
    if slippage_bps as u64 > BPS_DENOMINATOR {
        return Err(SdkError::InvalidParameters(
            "Slippage cannot exceed 100%".to_string(),
        ));
    }

    let denominator = BPS_DENOMINATOR as u128;
    let factor = if is_min {
        denominator - slippage_bps as u128
    } else {
        denominator + slippage_bps as u128
    };

    amount
        .checked_mul(factor)
        .map(|v| v / denominator)
        .ok_or(SdkError::MathOverflow)
}

/// Seconds since the Unix epoch plus `window_secs`
pub fn deadline_from_now(window_secs: u64) -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
        .saturating_add(window_secs)
}
