//! # Tick Windows

use std::fmt;

/// Liquidity position bounds, both on the fee tier's spacing grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct TickWindow {
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl TickWindow {
    /// Number of ticks covered
    pub fn width(&self) -> i64 {
        i64::from(self.tick_upper) - i64::from(self.tick_lower)
    }

    /// Whether a pool at `tick` earns fees on this position (lower inclusive)
    pub fn contains(&self, tick: i32) -> bool {
        self.tick_lower <= tick && tick < self.tick_upper
    }
}

impl fmt::Display for TickWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.tick_lower, self.tick_upper)
    }
}
