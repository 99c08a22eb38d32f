//! Pool launch and liquidity workflow
//!
//! Sequencing of a launch: resolve the fee tier, fetch token metadata, encode
//! the price, get or create the pool in canonical order, record it, and
//! initialize it once. Liquidity is always planned against a freshly read tick.

use bigdecimal::BigDecimal;
use num_bigint::BigUint;
use tracing::{info, instrument, warn};

use poolkit_core::{
    encode, plan, sort_tokens, EncodedPrice, FeeTier, HumanRatio, TickWindow, TokenAddress,
};

use crate::error::{SdkError, SdkResult};
use crate::gateway::{ChainGateway, MintParams, MintReceipt};
use crate::registry::{pool_key, AddressRegistry};
use crate::utils::amount_with_slippage;

/// A pool to launch: `1 token_a = ratio token_b`
#[derive(Debug, Clone)]
pub struct PoolLaunch {
    pub token_a: String,
    pub token_b: String,
    pub fee: u32,
    pub ratio: HumanRatio,
}

/// What `launch_pool` did
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub pool: String,
    pub token0: TokenAddress,
    pub token1: TokenAddress,
    pub fee: FeeTier,
    /// The pool's price after the launch
    pub sqrt_price_x96: BigUint,
    /// token1 per token0 in whole tokens
    pub human_price: BigDecimal,
    /// True when the pool was deployed by this launch
    pub created: bool,
    /// True when this launch set the price
    pub initialized: bool,
    /// True when the caller's token_a became token1
    pub flipped: bool,
}

/// Liquidity to add around a pool's current tick
#[derive(Debug, Clone)]
pub struct LiquidityRequest {
    pub pool: String,
    pub range_half_width: u32,
    /// Canonical token0 amount, base units
    pub amount0_desired: u128,
    /// Canonical token1 amount, base units
    pub amount1_desired: u128,
    pub slippage_bps: u16,
    pub recipient: String,
    pub deadline: u64,
}

/// Minted position and the window it was minted in
#[derive(Debug, Clone)]
pub struct LiquidityOutcome {
    pub window: TickWindow,
    pub current_tick: i32,
    pub receipt: MintReceipt,
}

/// Launch workflow over a chain gateway and an address registry
pub struct PoolBootstrapper<G, R> {
    gateway: G,
    registry: R,
}

impl<G: ChainGateway, R: AddressRegistry> PoolBootstrapper<G, R> {
    pub fn new(gateway: G, registry: R) -> Self {
        Self { gateway, registry }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Create (if needed) and initialize (if needed) a pool at the requested price
    #[instrument(skip(self, launch), fields(token_a = %launch.token_a, token_b = %launch.token_b, fee = launch.fee))]
    pub async fn launch_pool(&self, launch: &PoolLaunch) -> SdkResult<LaunchOutcome> {
        let tier = FeeTier::try_from(launch.fee)?;

        let meta_a = self.gateway.token_metadata(&launch.token_a).await?;
        let meta_b = self.gateway.token_metadata(&launch.token_b).await?;
        let token_a = meta_a.descriptor()?;
        let token_b = meta_b.descriptor()?;

        // Encode before any state-changing call
        let encoded = encode(&token_a, &token_b, &launch.ratio)?;
        let pair = sort_tokens(&token_a, &token_b)?;
        let (token0, token1) = (pair.token0.address.clone(), pair.token1.address.clone());

        let (pool, created) = match self.gateway.get_pool(&token0, &token1, tier).await? {
            Some(pool) => {
                info!(%pool, "pool already deployed");
                (pool, false)
            }
            None => {
                let pool = self.gateway.create_pool(&token0, &token1, tier).await?;
                info!(%pool, "pool created");
                (pool, true)
            }
        };

        self.registry
            .set(&pool_key(&token0, &token1, tier)?, &pool)?;

        let state = self.gateway.pool_state(&pool).await?;
        let (sqrt_price_x96, initialized) = if state.is_initialized() {
            if &state.sqrt_price_x96 != encoded.sqrt_price_x96() {
                warn!(
                    %pool,
                    current = %state.sqrt_price_x96,
                    requested = %encoded,
                    "pool already initialized at a different price; leaving it unchanged"
                );
            }
            (state.sqrt_price_x96, false)
        } else {
            let receipt = self.gateway.initialize(&pool, encoded.sqrt_price_x96()).await?;
            info!(%pool, tx = %receipt.tx_hash, sqrt_price_x96 = %encoded, "pool initialized");
            (encoded.into_inner(), true)
        };

        let human_price = EncodedPrice::from_sqrt_price_x96(sqrt_price_x96.clone())?
            .human_price(pair.token0.decimals, pair.token1.decimals);
        info!(
            %pool,
            price = %human_price,
            token0 = meta_label(&meta_a, &meta_b, pair.flipped, false),
            token1 = meta_label(&meta_a, &meta_b, pair.flipped, true),
            "pool price"
        );

        Ok(LaunchOutcome {
            pool,
            token0,
            token1,
            fee: tier,
            sqrt_price_x96,
            human_price,
            created,
            initialized,
            flipped: pair.flipped,
        })
    }

    /// Mint a position centered on the pool's current tick
    #[instrument(skip(self, request), fields(pool = %request.pool))]
    pub async fn provide_liquidity(&self, request: &LiquidityRequest) -> SdkResult<LiquidityOutcome> {
        let state = self.gateway.pool_state(&request.pool).await?;
        if !state.is_initialized() {
            return Err(SdkError::InvalidParameters(format!(
                "pool {} is not initialized",
                request.pool
            )));
        }

        let window = plan(state.fee, state.tick, request.range_half_width)?;
        info!(tick = state.tick, %window, "planned tick window");

        let params = MintParams {
            token0: state.token0.clone(),
            token1: state.token1.clone(),
            fee: state.fee,
            tick_lower: window.tick_lower,
            tick_upper: window.tick_upper,
            amount0_desired: request.amount0_desired,
            amount1_desired: request.amount1_desired,
            amount0_min: amount_with_slippage(request.amount0_desired, request.slippage_bps, true)?,
            amount1_min: amount_with_slippage(request.amount1_desired, request.slippage_bps, true)?,
            recipient: request.recipient.clone(),
            deadline: request.deadline,
        };

        let receipt = self.gateway.mint(&params).await?;
        info!(
            token_id = receipt.token_id,
            liquidity = receipt.liquidity,
            tx = %receipt.tx_hash,
            "position minted"
        );

        Ok(LiquidityOutcome {
            window,
            current_tick: state.tick,
            receipt,
        })
    }

    /// Registry lookup of a pool; token order does not matter
    pub fn resolve_pool(&self, token_a: &str, token_b: &str, fee: u32) -> SdkResult<Option<String>> {
        let tier = FeeTier::try_from(fee)?;
        let token_a = TokenAddress::new(token_a)?;
        let token_b = TokenAddress::new(token_b)?;
        self.registry.get(&pool_key(&token_a, &token_b, tier)?)
    }
}

fn meta_label<'a>(
    meta_a: &'a crate::gateway::TokenMetadata,
    meta_b: &'a crate::gateway::TokenMetadata,
    flipped: bool,
    second: bool,
) -> &'a str {
    if flipped != second {
        meta_b.label()
    } else {
        meta_a.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryRegistry;
    use crate::testing::SimulatedChain;
    use poolkit_core::PoolKitError;

    const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

    fn bootstrapper() -> PoolBootstrapper<SimulatedChain, MemoryRegistry> {
        let chain = SimulatedChain::new();
        chain.add_token(WETH, "WETH", Some(18)).unwrap();
        chain.add_token(USDC, "USDC", Some(6)).unwrap();
        PoolBootstrapper::new(chain, MemoryRegistry::new())
    }

    fn weth_usdc() -> PoolLaunch {
        PoolLaunch {
            token_a: WETH.to_string(),
            token_b: USDC.to_string(),
            fee: 3000,
            ratio: "4000".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_unknown_fee_has_no_side_effects() {
        let boot = bootstrapper();
        let mut launch = weth_usdc();
        launch.fee = 2500;

        let err = boot.launch_pool(&launch).await.unwrap_err();
        assert!(matches!(err, SdkError::Core(PoolKitError::UnknownFeeTier(2500))));
        assert!(boot.gateway().actions().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_ratio_has_no_side_effects() {
        let boot = bootstrapper();
        let mut launch = weth_usdc();
        // Out of the sqrt price domain once decimals are applied
        launch.ratio = HumanRatio::new(BigUint::from(1u32), BigUint::from(10u32).pow(60)).unwrap();

        assert!(boot.launch_pool(&launch).await.is_err());
        assert!(boot.gateway().actions().unwrap().is_empty());
        assert!(boot.registry().entries().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_labels_follow_canonical_order() {
        let boot = bootstrapper();
        let outcome = boot.launch_pool(&weth_usdc()).await.unwrap();
        assert!(outcome.flipped);
        assert_eq!(outcome.token0.as_str(), USDC);
    }
}
