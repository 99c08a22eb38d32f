//! SDK error types

use poolkit_core::PoolKitError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Pricing or range planning failure
    #[error(transparent)]
    Core(#[from] PoolKitError),

    /// Contract read or write failed
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Address registry could not be read or written
    #[error("Registry error: {0}")]
    Registry(String),

    /// Pool not found
    #[error("Pool not found: {0}")]
    PoolNotFound(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Math overflow
    #[error("Math overflow")]
    MathOverflow,
}

impl From<std::io::Error> for SdkError {
    fn from(err: std::io::Error) -> Self {
        SdkError::Registry(err.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Registry(err.to_string())
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
