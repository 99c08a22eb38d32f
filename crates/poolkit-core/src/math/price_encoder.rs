//! # Price Encoder
//!
//! Converts a human exchange ratio into the Q64.96 sqrt price a pool is
//! initialized with.
//!
//! The pool price is always token1 base units per token0 base unit, where
//! token0 is the smaller address. The caller's ratio is therefore:
//! 1. inverted if the caller listed the tokens in the other order,
//! 2. scaled by `10^(decimals1 - decimals0)` to move from whole tokens to
//!    base units,
//! 3. square-rooted and shifted by 96 bits, truncating toward zero.
//!
//! All steps are exact rational/integer arithmetic; no binary floats.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::constants::RESOLUTION;
use crate::errors::{CoreResult, PoolKitError};
use crate::types::{CanonicalPair, EncodedPrice, HumanRatio, PriceRequest, TokenAddress, TokenDescriptor};

/// Canonical ordering of two addresses.
///
/// This is the one place the ordering rule lives; pool lookups, registry keys
/// and price encoding all go through it.
pub fn sort_addresses<'a>(
    a: &'a TokenAddress,
    b: &'a TokenAddress,
) -> CoreResult<CanonicalPair<'a, TokenAddress>> {
    if a == b {
        return Err(PoolKitError::IdenticalTokens(a.to_string()));
    }
    Ok(if a < b {
        CanonicalPair { token0: a, token1: b, flipped: false }
    } else {
        CanonicalPair { token0: b, token1: a, flipped: true }
    })
}

/// Canonical ordering of two tokens by address
pub fn sort_tokens<'a>(
    a: &'a TokenDescriptor,
    b: &'a TokenDescriptor,
) -> CoreResult<CanonicalPair<'a, TokenDescriptor>> {
    let order = sort_addresses(&a.address, &b.address)?;
    Ok(if order.flipped {
        CanonicalPair { token0: b, token1: a, flipped: true }
    } else {
        CanonicalPair { token0: a, token1: b, flipped: false }
    })
}

/// Encode `1 input_token0 = ratio input_token1` as a pool sqrt price
pub fn encode(
    input_token0: &TokenDescriptor,
    input_token1: &TokenDescriptor,
    ratio: &HumanRatio,
) -> CoreResult<EncodedPrice> {
    let pair = sort_tokens(input_token0, input_token1)?;

    // canonical1 per canonical0, in whole tokens
    let canonical = if pair.flipped {
        ratio.inverse()
    } else {
        ratio.clone()
    };

    // Whole tokens to base units
    let numer = canonical.numer() * pow10(pair.token1.decimals);
    let denom = canonical.denom() * pow10(pair.token0.decimals);

    let sqrt_price_x96 = sqrt_price_x96_from_ratio(&numer, &denom)?;
    EncodedPrice::from_sqrt_price_x96(sqrt_price_x96)
}

/// Encode a [`PriceRequest`]
pub fn encode_request(request: &PriceRequest) -> CoreResult<EncodedPrice> {
    encode(&request.input_token0, &request.input_token1, &request.ratio)
}

/// `floor(sqrt(numer / denom) * 2^96)` over base-unit amounts.
///
/// Computed as `isqrt(floor(numer * 2^192 / denom))`, which is exact since
/// `floor(sqrt(floor(x))) == floor(sqrt(x))` for non-negative `x`.
pub fn sqrt_price_x96_from_ratio(numer: &BigUint, denom: &BigUint) -> CoreResult<BigUint> {
    if numer.is_zero() {
        return Err(PoolKitError::invalid_ratio("ratio must be positive"));
    }
    if denom.is_zero() {
        return Err(PoolKitError::invalid_ratio("denominator must be non-zero"));
    }
    let scaled = (numer << (2 * RESOLUTION) as usize) / denom;
    Ok(scaled.sqrt())
}

fn pow10(exponent: u8) -> BigUint {
    BigUint::from(10u32).pow(u32::from(exponent))
}
