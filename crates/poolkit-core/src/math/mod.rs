//! # Pricing Functions
//!
//! Pure functions used when a pool is created and when liquidity is added.

pub mod price_encoder;
pub mod tick_range;

// Re-export commonly used functions
pub use price_encoder::*;
pub use tick_range::*;
