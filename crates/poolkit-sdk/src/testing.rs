//! In-process chain for tests and dry runs
//!
//! [`SimulatedChain`] implements every gateway trait against in-memory state.
//! It enforces the same preconditions the deployed contracts do (canonical
//! token order, one initialization per pool, aligned non-empty windows) so the
//! bootstrap workflow can be exercised end to end without a node.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use poolkit_core::{FeeTier, TokenAddress, MAX_TICK, MIN_TICK, RESOLUTION};

use crate::error::{SdkError, SdkResult};
use crate::gateway::{
    LiquidityProvider, MintParams, MintReceipt, PoolFactory, PoolInitializer, PoolState,
    PoolStateSource, TokenMetadata, TokenMetadataSource, TxReceipt,
};

/// State-changing call recorded by [`SimulatedChain`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainAction {
    CreatePool {
        pool: String,
        token0: TokenAddress,
        token1: TokenAddress,
        fee: u32,
    },
    Initialize {
        pool: String,
        sqrt_price_x96: BigUint,
    },
    Mint(MintParams),
}

#[derive(Debug, Default)]
struct ChainState {
    tokens: HashMap<TokenAddress, TokenMetadata>,
    pools: BTreeMap<String, PoolState>,
    pool_index: HashMap<(TokenAddress, TokenAddress, u32), String>,
    next_pool: u64,
    next_tx: u64,
    next_token_id: u64,
    actions: Vec<ChainAction>,
}

impl ChainState {
    fn tx_hash(&mut self) -> String {
        self.next_tx += 1;
        format!("0x{:064x}", self.next_tx)
    }
}

/// In-memory protocol deployment
#[derive(Debug, Default)]
pub struct SimulatedChain {
    state: Mutex<ChainState>,
}

impl SimulatedChain {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> SdkResult<MutexGuard<'_, ChainState>> {
        self.state
            .lock()
            .map_err(|_| SdkError::Gateway("simulated chain lock poisoned".to_string()))
    }

    /// Register a token. `None` decimals models a contract without `decimals()`.
    pub fn add_token(&self, address: &str, symbol: &str, decimals: Option<u8>) -> SdkResult<TokenAddress> {
        let address = TokenAddress::new(address)?;
        self.state()?.tokens.insert(
            address.clone(),
            TokenMetadata {
                address: address.to_string(),
                symbol: Some(symbol.to_string()),
                decimals,
            },
        );
        Ok(address)
    }

    /// Move a pool's current tick, as swaps would
    pub fn set_tick(&self, pool: &str, tick: i32) -> SdkResult<()> {
        let mut state = self.state()?;
        let entry = state
            .pools
            .get_mut(pool)
            .ok_or_else(|| SdkError::PoolNotFound(pool.to_string()))?;
        entry.tick = tick;
        Ok(())
    }

    /// Recorded state-changing calls, oldest first
    pub fn actions(&self) -> SdkResult<Vec<ChainAction>> {
        Ok(self.state()?.actions.clone())
    }

    pub fn pool_count(&self) -> SdkResult<usize> {
        Ok(self.state()?.pools.len())
    }
}

/// Tick whose price is at or below `sqrt_price_x96`.
///
/// Float approximation; good enough for a simulated pool.
pub fn approximate_tick(sqrt_price_x96: &BigUint) -> i32 {
    let Some(sqrt) = sqrt_price_x96.to_f64() else {
        return MAX_TICK;
    };
    if sqrt <= 0.0 {
        return MIN_TICK;
    }
    let ln_price = 2.0 * (sqrt.ln() - RESOLUTION as f64 * std::f64::consts::LN_2);
    let tick = (ln_price / 1.0001f64.ln()).floor();
    tick.clamp(MIN_TICK as f64, MAX_TICK as f64) as i32
}

#[async_trait]
impl TokenMetadataSource for SimulatedChain {
    async fn token_metadata(&self, token: &str) -> SdkResult<TokenMetadata> {
        let address = TokenAddress::new(token)?;
        let state = self.state()?;
        Ok(state.tokens.get(&address).cloned().unwrap_or(TokenMetadata {
            address: address.to_string(),
            symbol: None,
            decimals: None,
        }))
    }
}

#[async_trait]
impl PoolStateSource for SimulatedChain {
    async fn pool_state(&self, pool: &str) -> SdkResult<PoolState> {
        self.state()?
            .pools
            .get(pool)
            .cloned()
            .ok_or_else(|| SdkError::PoolNotFound(pool.to_string()))
    }
}

#[async_trait]
impl PoolFactory for SimulatedChain {
    async fn get_pool(
        &self,
        token0: &TokenAddress,
        token1: &TokenAddress,
        fee: FeeTier,
    ) -> SdkResult<Option<String>> {
        let key = (token0.clone(), token1.clone(), fee.fee());
        Ok(self.state()?.pool_index.get(&key).cloned())
    }

    async fn create_pool(
        &self,
        token0: &TokenAddress,
        token1: &TokenAddress,
        fee: FeeTier,
    ) -> SdkResult<String> {
        if token0 >= token1 {
            return Err(SdkError::InvalidParameters(format!(
                "tokens not in canonical order: {} / {}",
                token0, token1
            )));
        }

        let mut state = self.state()?;
        let key = (token0.clone(), token1.clone(), fee.fee());
        if state.pool_index.contains_key(&key) {
            return Err(SdkError::Gateway("pool already exists".to_string()));
        }

        state.next_pool += 1;
        let pool = format!("0x{:040x}", 0x9000 + state.next_pool);
        state.pools.insert(
            pool.clone(),
            PoolState {
                pool: pool.clone(),
                token0: token0.clone(),
                token1: token1.clone(),
                fee: fee.fee(),
                tick: 0,
                sqrt_price_x96: BigUint::zero(),
            },
        );
        state.pool_index.insert(key, pool.clone());
        state.actions.push(ChainAction::CreatePool {
            pool: pool.clone(),
            token0: token0.clone(),
            token1: token1.clone(),
            fee: fee.fee(),
        });
        Ok(pool)
    }
}

#[async_trait]
impl PoolInitializer for SimulatedChain {
    async fn initialize(&self, pool: &str, sqrt_price_x96: &BigUint) -> SdkResult<TxReceipt> {
        let mut state = self.state()?;
        let entry = state
            .pools
            .get_mut(pool)
            .ok_or_else(|| SdkError::PoolNotFound(pool.to_string()))?;
        if entry.is_initialized() {
            return Err(SdkError::Gateway(format!("pool {} already initialized", pool)));
        }

        entry.sqrt_price_x96 = sqrt_price_x96.clone();
        entry.tick = approximate_tick(sqrt_price_x96);

        state.actions.push(ChainAction::Initialize {
            pool: pool.to_string(),
            sqrt_price_x96: sqrt_price_x96.clone(),
        });
        Ok(TxReceipt {
            tx_hash: state.tx_hash(),
        })
    }
}

#[async_trait]
impl LiquidityProvider for SimulatedChain {
    async fn mint(&self, params: &MintParams) -> SdkResult<MintReceipt> {
        let tier = FeeTier::try_from(params.fee)?;
        let mut state = self.state()?;

        let key = (params.token0.clone(), params.token1.clone(), params.fee);
        let pool = state
            .pool_index
            .get(&key)
            .and_then(|address| state.pools.get(address))
            .ok_or_else(|| SdkError::PoolNotFound(format!("{}/{}/{}", params.token0, params.token1, params.fee)))?;
        if !pool.is_initialized() {
            return Err(SdkError::Gateway("pool not initialized".to_string()));
        }

        let spacing = tier.tick_spacing();
        if params.tick_lower >= params.tick_upper
            || params.tick_lower < MIN_TICK
            || params.tick_upper > MAX_TICK
            || params.tick_lower % spacing != 0
            || params.tick_upper % spacing != 0
        {
            return Err(SdkError::Gateway(format!(
                "invalid tick window [{}, {})",
                params.tick_lower, params.tick_upper
            )));
        }
        if params.amount0_desired < params.amount0_min || params.amount1_desired < params.amount1_min {
            return Err(SdkError::Gateway("price slippage check".to_string()));
        }

        let liquidity = (BigUint::from(params.amount0_desired) * BigUint::from(params.amount1_desired))
            .sqrt()
            .to_u128()
            .ok_or(SdkError::MathOverflow)?;

        state.next_token_id += 1;
        let token_id = state.next_token_id;
        state.actions.push(ChainAction::Mint(params.clone()));

        Ok(MintReceipt {
            tx_hash: state.tx_hash(),
            token_id,
            liquidity,
            amount0: params.amount0_desired,
            amount1: params.amount1_desired,
        })
    }
}
