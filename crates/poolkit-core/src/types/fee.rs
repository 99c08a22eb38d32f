//! # Fee Tiers
//!
//! The protocol enables exactly three fee tiers, each bound to a tick spacing.
//! Any other fee value is rejected rather than mapped to a default spacing.

use std::fmt;

use crate::constants::{
    FEE_HIGH, FEE_LOW, FEE_MEDIUM, MAX_TICK, MIN_TICK, TICK_SPACING_HIGH, TICK_SPACING_LOW,
    TICK_SPACING_MEDIUM,
};
use crate::errors::{CoreResult, PoolKitError};

/// Fee tier enabled on the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "client",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub enum FeeTier {
    /// 0.05%, tick spacing 10
    Low,
    /// 0.3%, tick spacing 60
    Medium,
    /// 1%, tick spacing 200
    High,
}

impl FeeTier {
    pub const ALL: [FeeTier; 3] = [FeeTier::Low, FeeTier::Medium, FeeTier::High];

    /// Resolve a raw fee (hundredths of a basis point)
    pub fn from_fee(fee: u32) -> CoreResult<Self> {
        match fee {
            FEE_LOW => Ok(FeeTier::Low),
            FEE_MEDIUM => Ok(FeeTier::Medium),
            FEE_HIGH => Ok(FeeTier::High),
            other => Err(PoolKitError::UnknownFeeTier(other)),
        }
    }

    /// Raw fee in hundredths of a basis point
    pub fn fee(self) -> u32 {
        match self {
            FeeTier::Low => FEE_LOW,
            FeeTier::Medium => FEE_MEDIUM,
            FeeTier::High => FEE_HIGH,
        }
    }

    pub fn tick_spacing(self) -> i32 {
        match self {
            FeeTier::Low => TICK_SPACING_LOW,
            FeeTier::Medium => TICK_SPACING_MEDIUM,
            FeeTier::High => TICK_SPACING_HIGH,
        }
    }

    /// Smallest tick a position may use in this tier
    pub fn min_usable_tick(self) -> i32 {
        // Truncating division rounds toward zero, i.e. up for negative ticks
        (MIN_TICK / self.tick_spacing()) * self.tick_spacing()
    }

    /// Largest tick a position may use in this tier
    pub fn max_usable_tick(self) -> i32 {
        (MAX_TICK / self.tick_spacing()) * self.tick_spacing()
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = PoolKitError;

    fn try_from(fee: u32) -> CoreResult<Self> {
        FeeTier::from_fee(fee)
    }
}

impl From<FeeTier> for u32 {
    fn from(tier: FeeTier) -> Self {
        tier.fee()
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fee())
    }
}
