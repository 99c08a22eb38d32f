//! # Protocol Constants
//!
//! Fixed constants of the external AMM protocol. These mirror the values
//! hard-coded in the pool contracts and must not drift from them:
//! - Fixed-point scale (Q96)
//! - Tick bounds
//! - Sqrt price bounds
//! - Fee tiers and their tick spacings

use num_bigint::BigUint;

// ============================================================================
// Fixed-Point Constants
// ============================================================================

/// Number of fractional bits in a sqrt price
pub const RESOLUTION: u32 = 96;

/// Q96 fixed-point scale factor: 2^96
pub const Q96: u128 = 1u128 << RESOLUTION;

/// Width of the sqrt price slot in the pool contract
pub const SQRT_PRICE_BITS: u64 = 160;

// ============================================================================
// Tick Constants
// ============================================================================

/// Minimum tick supported by the pool contract
pub const MIN_TICK: i32 = -887_272;

/// Maximum tick supported by the pool contract
pub const MAX_TICK: i32 = 887_272;

/// Minimum sqrt price (value at MIN_TICK)
pub const MIN_SQRT_RATIO: u64 = 4_295_128_739;

/// Maximum sqrt price (value at MAX_TICK), little-endian u32 limbs of
/// 1461446703485210103287273052203988822378723970342
const MAX_SQRT_RATIO_LIMBS: [u32; 5] = [
    0x6398_8d26,
    0x5d95_1d52,
    0x5064_8849,
    0xefd1_fc6a,
    0xfffd_8963,
];

/// Minimum sqrt price as a big integer
pub fn min_sqrt_ratio() -> BigUint {
    BigUint::from(MIN_SQRT_RATIO)
}

/// Maximum sqrt price as a big integer (exclusive upper bound)
pub fn max_sqrt_ratio() -> BigUint {
    BigUint::from_slice(&MAX_SQRT_RATIO_LIMBS)
}

// ============================================================================
// Fee Tier Constants
// ============================================================================

/// 0.05% fee tier (hundredths of a basis point)
pub const FEE_LOW: u32 = 500;

/// 0.3% fee tier
pub const FEE_MEDIUM: u32 = 3_000;

/// 1% fee tier
pub const FEE_HIGH: u32 = 10_000;

/// Tick spacing enabled for the 0.05% tier
pub const TICK_SPACING_LOW: i32 = 10;

/// Tick spacing enabled for the 0.3% tier
pub const TICK_SPACING_MEDIUM: i32 = 60;

/// Tick spacing enabled for the 1% tier
pub const TICK_SPACING_HIGH: i32 = 200;

// ============================================================================
// Range Presets
// ============================================================================

/// Half width used for established pools (±120 ticks, roughly ±1.2%)
pub const DEFAULT_RANGE_HALF_WIDTH: u32 = 120;

/// Half width for volatile or freshly bootstrapped pools (±1200 ticks)
pub const WIDE_RANGE_HALF_WIDTH: u32 = 1_200;

/// Basis points denominator (10,000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_ratio_bounds() {
        assert_eq!(
            max_sqrt_ratio().to_string(),
            "1461446703485210103287273052203988822378723970342"
        );
        assert_eq!(max_sqrt_ratio().bits(), SQRT_PRICE_BITS);
        assert!(min_sqrt_ratio() < max_sqrt_ratio());
    }

    #[test]
    fn test_q96() {
        assert_eq!(Q96, 79228162514264337593543950336u128);
    }
}
