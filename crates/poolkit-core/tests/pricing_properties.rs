//! # Pricing Property Tests
//!
//! Properties the encoder and planner must hold for any input, checked with
//! proptest over realistic token decimals, ratios and ticks.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use poolkit_core::*;
use proptest::prelude::*;

fn token(address: &str, decimals: u8) -> TokenDescriptor {
    TokenDescriptor::new(TokenAddress::new(address).unwrap(), decimals)
}

fn decimal_ratio(mantissa: u64, exponent: i64) -> BigDecimal {
    // mantissa * 10^exponent
    BigDecimal::new(BigInt::from(mantissa), -exponent)
}

fn fee_tier() -> impl Strategy<Value = FeeTier> {
    prop_oneof![
        Just(FeeTier::Low),
        Just(FeeTier::Medium),
        Just(FeeTier::High),
    ]
}

proptest! {
    #[test]
    fn prop_round_trip_within_tolerance(
        mantissa in 1u64..1_000_000_000,
        exponent in -10i64..10,
        decimals0 in 0u8..=12,
        decimals1 in 0u8..=12,
    ) {
        let token0 = token("0x1000000000000000000000000000000000000000", decimals0);
        let token1 = token("0x2000000000000000000000000000000000000000", decimals1);
        let human = decimal_ratio(mantissa, exponent);
        let ratio = HumanRatio::from_decimal(&human).unwrap();

        let price = encode(&token0, &token1, &ratio).unwrap();

        // Expected raw ratio R = human * 10^(d1 - d0)
        let shift = BigDecimal::new(BigInt::from(1), i64::from(decimals0) - i64::from(decimals1));
        let expected = &human * shift;
        let relative = ((price.raw_price() - &expected) / &expected).abs();
        prop_assert!(relative < BigDecimal::from_str("1e-12").unwrap());
    }

    #[test]
    fn prop_inversion_matches_swapped_request(
        mantissa in 1u64..1_000_000_000,
        exponent in -6i64..6,
        decimals_a in 0u8..=18,
        decimals_b in 0u8..=18,
    ) {
        // `a` sorts after `b`, so encoding from a's side must invert
        let a = token("0xffffffffffffffffffffffffffffffffffffff01", decimals_a);
        let b = token("0x00000000000000000000000000000000000000b0", decimals_b);
        let ratio = HumanRatio::from_decimal(&decimal_ratio(mantissa, exponent)).unwrap();

        let forward = encode(&a, &b, &ratio);
        let swapped = encode(&b, &a, &ratio.inverse());
        prop_assert_eq!(forward, swapped);
    }

    #[test]
    fn prop_encoding_is_floor_of_exact_root(
        numer in 1u64..u64::MAX,
        denom in 1u64..u64::MAX,
    ) {
        let numer = BigUint::from(numer);
        let denom = BigUint::from(denom);
        let sqrt = sqrt_price_x96_from_ratio(&numer, &denom).unwrap();

        // sqrt^2 * denom <= numer * 2^192 < (sqrt + 1)^2 * denom
        let target = &numer << 192usize;
        prop_assert!(&sqrt * &sqrt * &denom <= target);
        let next = &sqrt + 1u32;
        prop_assert!(&next * &next * &denom > target);
    }

    #[test]
    fn prop_window_aligned_and_contains_range(
        tier in fee_tier(),
        current_tick in -800_000i32..800_000,
        half_width in 1u32..20_000,
    ) {
        let spacing = tier.tick_spacing();
        let window = plan(tier.fee(), current_tick, half_width).unwrap();

        prop_assert_eq!(window.tick_lower % spacing, 0);
        prop_assert_eq!(window.tick_upper % spacing, 0);
        prop_assert!(window.tick_lower <= current_tick - half_width as i32);
        prop_assert!(window.tick_upper >= current_tick + half_width as i32);
        prop_assert!(window.tick_lower < window.tick_upper);
    }

    #[test]
    fn prop_window_never_degenerate_for_legal_ticks(
        tier in fee_tier(),
        half_width in 1u32..5_000,
        offset in 0i64..1_774_544,
    ) {
        let half = half_width as i64;
        // Legal ticks on the usable grid, at least a half width from either edge
        let low = i64::from(tier.min_usable_tick()) + half;
        let high = i64::from(tier.max_usable_tick()) - half;
        let current_tick = (low + offset % (high - low + 1)) as i32;

        let window = plan_for_tier(tier, current_tick, half_width).unwrap();
        prop_assert!(window.tick_lower < window.tick_upper);
        prop_assert!(window.contains(current_tick));
        prop_assert!(window.tick_lower >= tier.min_usable_tick());
        prop_assert!(window.tick_upper <= tier.max_usable_tick());
    }

    #[test]
    fn prop_unknown_fee_always_rejected(fee in any::<u32>()) {
        prop_assume!(fee != 500 && fee != 3000 && fee != 10000);
        prop_assert_eq!(plan(fee, 0, 120), Err(PoolKitError::UnknownFeeTier(fee)));
    }
}

#[test]
fn test_rejection_scenarios() {
    assert!(matches!(
        "0".parse::<HumanRatio>(),
        Err(PoolKitError::InvalidRatio(_))
    ));
    assert!(matches!(
        HumanRatio::from_f64(0.0),
        Err(PoolKitError::InvalidRatio(_))
    ));
    assert_eq!(plan(9999, 0, 120), Err(PoolKitError::UnknownFeeTier(9999)));
}

#[test]
fn test_request_wrapper_matches_encode() {
    let weth = token("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18);
    let usdc = token("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6);
    let ratio: HumanRatio = "4000".parse().unwrap();

    let request = PriceRequest::new(weth.clone(), usdc.clone(), ratio.clone());
    assert_eq!(
        encode_request(&request).unwrap(),
        encode(&weth, &usdc, &ratio).unwrap()
    );
}
