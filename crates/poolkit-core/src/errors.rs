//! # Core Error Types
//!
//! Errors raised by the price encoder and the tick range planner. None of
//! them are recoverable inside the core: every failure surfaces to the caller,
//! which decides whether to retry with different parameters.

use thiserror::Error;

/// Pricing and range planning errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolKitError {
    // ========================================================================
    // Price Errors
    // ========================================================================

    #[error("Invalid ratio: {0}")]
    InvalidRatio(String),

    #[error("Sqrt price out of range: {0}")]
    PriceOutOfRange(String),

    // ========================================================================
    // Token Errors
    // ========================================================================

    #[error("Missing token metadata: {0}")]
    MissingTokenMetadata(String),

    #[error("Identical tokens: {0}")]
    IdenticalTokens(String),

    // ========================================================================
    // Range Errors
    // ========================================================================

    #[error("Unknown fee tier: {0}")]
    UnknownFeeTier(u32),

    #[error("Tick out of range: {0}")]
    TickOutOfRange(i32),

    #[error("Degenerate tick window: lower {tick_lower} >= upper {tick_upper}")]
    DegenerateTickWindow { tick_lower: i32, tick_upper: i32 },
}

/// Result type using core errors
pub type CoreResult<T> = Result<T, PoolKitError>;

// Helper functions for creating specific errors
impl PoolKitError {
    /// Create an invalid ratio error with reason
    pub fn invalid_ratio(reason: impl Into<String>) -> Self {
        Self::InvalidRatio(reason.into())
    }

    /// Create a missing metadata error for a token
    pub fn missing_metadata(token: impl Into<String>) -> Self {
        Self::MissingTokenMetadata(token.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PoolKitError::UnknownFeeTier(9999);
        assert_eq!(format!("{}", err), "Unknown fee tier: 9999");

        let err = PoolKitError::DegenerateTickWindow { tick_lower: 60, tick_upper: 60 };
        assert_eq!(format!("{}", err), "Degenerate tick window: lower 60 >= upper 60");

        let err = PoolKitError::invalid_ratio("ratio must be positive");
        assert!(format!("{}", err).contains("must be positive"));
    }
}
