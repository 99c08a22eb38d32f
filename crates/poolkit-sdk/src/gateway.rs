//! Contract-invocation interfaces
//!
//! The pool factory, pool and position manager contracts belong to the
//! external protocol. The workflow only talks to them through these traits, so
//! an RPC-backed client and the in-process [`SimulatedChain`] are
//! interchangeable.
//!
//! [`SimulatedChain`]: crate::testing::SimulatedChain

use std::collections::HashMap;

use async_trait::async_trait;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use poolkit_core::{CoreResult, FeeTier, TokenAddress, TokenDescriptor};

use crate::config::TokenConfig;
use crate::error::SdkResult;

/// Token metadata as reported by the token contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub address: String,
    pub symbol: Option<String>,
    /// `None` when the contract did not answer `decimals()`
    pub decimals: Option<u8>,
}

impl TokenMetadata {
    /// Convert into a descriptor; fails if decimals are unknown
    pub fn descriptor(&self) -> CoreResult<TokenDescriptor> {
        TokenDescriptor::from_metadata(&self.address, self.decimals)
    }

    pub fn label(&self) -> &str {
        self.symbol.as_deref().unwrap_or(&self.address)
    }
}

/// Pool slot0 and immutables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub pool: String,
    pub token0: TokenAddress,
    pub token1: TokenAddress,
    pub fee: u32,
    pub tick: i32,
    pub sqrt_price_x96: BigUint,
}

impl PoolState {
    /// A pool reports a zero sqrt price until `initialize` lands
    pub fn is_initialized(&self) -> bool {
        !self.sqrt_price_x96.is_zero()
    }
}

/// Receipt of a state-changing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_hash: String,
}

/// Position manager mint parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintParams {
    pub token0: TokenAddress,
    pub token1: TokenAddress,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0_desired: u128,
    pub amount1_desired: u128,
    pub amount0_min: u128,
    pub amount1_min: u128,
    pub recipient: String,
    /// Unix timestamp after which the mint reverts
    pub deadline: u64,
}

/// Result of a mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub tx_hash: String,
    pub token_id: u64,
    pub liquidity: u128,
    pub amount0: u128,
    pub amount1: u128,
}

/// Token metadata source
#[async_trait]
pub trait TokenMetadataSource: Send + Sync {
    async fn token_metadata(&self, token: &str) -> SdkResult<TokenMetadata>;
}

/// Pool state source. Callers must query right before planning a range.
#[async_trait]
pub trait PoolStateSource: Send + Sync {
    async fn pool_state(&self, pool: &str) -> SdkResult<PoolState>;
}

/// Pool factory
#[async_trait]
pub trait PoolFactory: Send + Sync {
    /// Look up an existing pool; tokens must be in canonical order
    async fn get_pool(
        &self,
        token0: &TokenAddress,
        token1: &TokenAddress,
        fee: FeeTier,
    ) -> SdkResult<Option<String>>;

    /// Deploy a pool; tokens must be in canonical order
    async fn create_pool(
        &self,
        token0: &TokenAddress,
        token1: &TokenAddress,
        fee: FeeTier,
    ) -> SdkResult<String>;
}

/// Pool initialization sink
#[async_trait]
pub trait PoolInitializer: Send + Sync {
    async fn initialize(&self, pool: &str, sqrt_price_x96: &BigUint) -> SdkResult<TxReceipt>;
}

/// Liquidity provision sink
#[async_trait]
pub trait LiquidityProvider: Send + Sync {
    async fn mint(&self, params: &MintParams) -> SdkResult<MintReceipt>;
}

/// Everything the bootstrap workflow needs from the chain
pub trait ChainGateway:
    TokenMetadataSource + PoolStateSource + PoolFactory + PoolInitializer + LiquidityProvider
{
}

impl<T> ChainGateway for T where
    T: TokenMetadataSource + PoolStateSource + PoolFactory + PoolInitializer + LiquidityProvider
{
}

/// Token metadata taken from the `[[tokens]]` config table
#[derive(Debug, Clone, Default)]
pub struct ConfiguredTokens {
    tokens: HashMap<TokenAddress, TokenMetadata>,
}

impl ConfiguredTokens {
    pub fn from_config(tokens: &[TokenConfig]) -> SdkResult<Self> {
        let mut map = HashMap::with_capacity(tokens.len());
        for token in tokens {
            let address = TokenAddress::new(&token.address)?;
            map.insert(
                address.clone(),
                TokenMetadata {
                    address: address.to_string(),
                    symbol: token.symbol.clone(),
                    decimals: Some(token.decimals),
                },
            );
        }
        Ok(Self { tokens: map })
    }

    pub fn get(&self, address: &TokenAddress) -> Option<&TokenMetadata> {
        self.tokens.get(address)
    }

    /// Resolve a symbol or an address to a configured address
    pub fn resolve(&self, symbol_or_address: &str) -> Option<&TokenMetadata> {
        let needle = symbol_or_address.trim();
        self.tokens.values().find(|meta| {
            meta.symbol
                .as_deref()
                .is_some_and(|symbol| symbol.eq_ignore_ascii_case(needle))
        })
        .or_else(|| {
            TokenAddress::new(needle)
                .ok()
                .and_then(|address| self.tokens.get(&address))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenMetadata> {
        self.tokens.values()
    }
}

#[async_trait]
impl TokenMetadataSource for ConfiguredTokens {
    async fn token_metadata(&self, token: &str) -> SdkResult<TokenMetadata> {
        let address = TokenAddress::new(token)?;
        Ok(self.tokens.get(&address).cloned().unwrap_or(TokenMetadata {
            address: address.to_string(),
            symbol: None,
            decimals: None,
        }))
    }
}
