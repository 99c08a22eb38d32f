//! # Price Types
//!
//! `PriceRequest` is what a caller asks for; `EncodedPrice` is the Q64.96
//! sqrt price handed unchanged to the pool's initialize call.

use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::One;

use crate::constants::{max_sqrt_ratio, min_sqrt_ratio, RESOLUTION};
use crate::errors::{CoreResult, PoolKitError};
use crate::types::{HumanRatio, TokenDescriptor};

/// Price request in the caller's own token order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    pub input_token0: TokenDescriptor,
    pub input_token1: TokenDescriptor,
    /// 1 whole `input_token0` = `ratio` whole `input_token1`
    pub ratio: HumanRatio,
}

impl PriceRequest {
    pub fn new(input_token0: TokenDescriptor, input_token1: TokenDescriptor, ratio: HumanRatio) -> Self {
        Self {
            input_token0,
            input_token1,
            ratio,
        }
    }
}

/// Sqrt price in Q64.96, expressed in canonical token base units
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedPrice {
    sqrt_price_x96: BigUint,
}

impl EncodedPrice {
    /// Wrap a raw sqrt price, checking the pool's legal range
    pub fn from_sqrt_price_x96(sqrt_price_x96: BigUint) -> CoreResult<Self> {
        if sqrt_price_x96 < min_sqrt_ratio() {
            return Err(PoolKitError::PriceOutOfRange(format!(
                "{} is below the minimum sqrt price {}",
                sqrt_price_x96,
                min_sqrt_ratio()
            )));
        }
        if sqrt_price_x96 >= max_sqrt_ratio() {
            return Err(PoolKitError::PriceOutOfRange(format!(
                "{} is at or above the maximum sqrt price {}",
                sqrt_price_x96,
                max_sqrt_ratio()
            )));
        }
        Ok(Self { sqrt_price_x96 })
    }

    pub fn sqrt_price_x96(&self) -> &BigUint {
        &self.sqrt_price_x96
    }

    pub fn into_inner(self) -> BigUint {
        self.sqrt_price_x96
    }

    /// Decoded base-unit price: token1 base units per token0 base unit
    pub fn raw_price(&self) -> BigDecimal {
        let squared = &self.sqrt_price_x96 * &self.sqrt_price_x96;
        let q192 = BigUint::one() << (2 * RESOLUTION) as usize;
        BigDecimal::new(BigInt::from(squared), 0) / BigDecimal::new(BigInt::from(q192), 0)
    }

    /// Decoded whole-token price: canonical token1 per canonical token0
    pub fn human_price(&self, decimals0: u8, decimals1: u8) -> BigDecimal {
        // raw * 10^(decimals0 - decimals1)
        let shift = BigDecimal::new(BigInt::one(), i64::from(decimals1) - i64::from(decimals0));
        self.raw_price() * shift
    }
}

impl fmt::Display for EncodedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sqrt_price_x96)
    }
}
