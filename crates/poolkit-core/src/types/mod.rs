//! # Core Type Definitions
//!
//! Value types flowing through the price encoder and the range planner.

pub mod fee;
pub mod price;
pub mod range;
pub mod ratio;
pub mod token;

// Re-export all types
pub use fee::*;
pub use price::*;
pub use range::*;
pub use ratio::*;
pub use token::*;
