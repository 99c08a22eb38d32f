//! # Poolkit Core - Pool Price Initialization
//!
//! This crate contains the pricing logic used when bootstrapping concentrated
//! liquidity pools on a Uniswap-V3 style protocol. It provides:
//!
//! - Canonical token ordering and decimal-aware price ratios
//! - Encoding of human prices into Q64.96 sqrt prices
//! - Tick windows aligned to the fee tier's tick spacing
//!
//! Everything here is pure: no I/O, no shared state. Contract calls live in
//! `poolkit-sdk`.
//!
//! ## Feature Flags
//!
//! - `client`: Enables serde serialization for off-chain use

pub mod constants;
pub mod errors;
pub mod math;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use errors::{CoreResult, PoolKitError};
pub use math::*;
pub use types::*;
