//! # Token Types
//!
//! Token identities and their decimal precision. Canonical ordering of a pair
//! compares the normalized address strings; the smaller one is token0.

use std::fmt;
use std::str::FromStr;

use crate::errors::{CoreResult, PoolKitError};

/// Normalized token identity (trimmed, lower-cased)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "client",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TokenAddress(String);

impl TokenAddress {
    /// Normalize a raw address. Empty input means the identity is unknown.
    pub fn new(raw: &str) -> CoreResult<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(PoolKitError::missing_metadata("token address is empty"));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TokenAddress {
    type Err = PoolKitError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = PoolKitError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::new(&value)
    }
}

impl From<TokenAddress> for String {
    fn from(address: TokenAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for TokenAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A token's identity and decimal precision, as read from its contract
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDescriptor {
    pub address: TokenAddress,
    pub decimals: u8,
}

impl TokenDescriptor {
    pub fn new(address: TokenAddress, decimals: u8) -> Self {
        Self { address, decimals }
    }

    /// Build a descriptor from possibly incomplete metadata.
    ///
    /// Missing decimals are an error: assuming 18 would silently scale the
    /// initial price by orders of magnitude for 6 or 8 decimal tokens.
    pub fn from_metadata(address: &str, decimals: Option<u8>) -> CoreResult<Self> {
        let address = TokenAddress::new(address)?;
        let decimals = decimals.ok_or_else(|| {
            PoolKitError::missing_metadata(format!("decimals unavailable for {}", address))
        })?;
        Ok(Self { address, decimals })
    }
}

/// Two tokens in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalPair<'a, T> {
    pub token0: &'a T,
    pub token1: &'a T,
    /// True when the caller's first token became token1
    pub flipped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_normalization() {
        let a = TokenAddress::new("  0xABCdef0000000000000000000000000000000001 ").unwrap();
        assert_eq!(a.as_str(), "0xabcdef0000000000000000000000000000000001");

        let b: TokenAddress = "0xabcdef0000000000000000000000000000000001".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_address_rejected() {
        assert!(matches!(
            TokenAddress::new("   "),
            Err(PoolKitError::MissingTokenMetadata(_))
        ));
    }

    #[test]
    fn test_missing_decimals_rejected() {
        let err = TokenDescriptor::from_metadata("0x01", None).unwrap_err();
        assert!(matches!(err, PoolKitError::MissingTokenMetadata(_)));

        let token = TokenDescriptor::from_metadata("0x01", Some(6)).unwrap();
        assert_eq!(token.decimals, 6);
    }

    #[test]
    fn test_ordering_is_case_insensitive() {
        let upper = TokenAddress::new("0xB0").unwrap();
        let lower = TokenAddress::new("0xa0").unwrap();
        assert!(lower < upper);
    }
}
