// Pool launch command

use anyhow::{Context, Result};
use clap::Args;
use poolkit_sdk::testing::SimulatedChain;
use poolkit_sdk::utils::deadline_from_now;
use poolkit_sdk::{
    ConfiguredTokens, LiquidityRequest, MemoryRegistry, PoolBootstrapper, PoolLaunch, PoolkitConfig,
};

use super::utils::{info, require_config, success, warn};

/// Recipient used for simulated mints when `[liquidity].recipient` is unset
const DRY_RUN_RECIPIENT: &str = "0x0000000000000000000000000000000000000001";

#[derive(Args)]
pub struct LaunchCmd {
    /// Run every pool against an in-process simulated chain
    #[arg(long)]
    dry_run: bool,
}

pub async fn execute(cmd: LaunchCmd, config: Option<&PoolkitConfig>) -> Result<()> {
    let config = require_config(config, "launch")?;
    if !cmd.dry_run {
        anyhow::bail!("Submitting transactions is not supported; rerun with --dry-run");
    }

    let tokens = ConfiguredTokens::from_config(&config.tokens)?;
    let chain = SimulatedChain::new();
    for meta in tokens.iter() {
        chain.add_token(&meta.address, meta.label(), meta.decimals)?;
    }
    let bootstrapper = PoolBootstrapper::new(chain, MemoryRegistry::new());

    info(&format!("Dry run: {} pools", config.pools.len()));

    for pool in &config.pools {
        let label = format!("{}/{} ({})", pool.token_a, pool.token_b, pool.fee);
        let token_a = tokens
            .resolve(&pool.token_a)
            .with_context(|| format!("{}: token_a is not in [[tokens]]", label))?;
        let token_b = tokens
            .resolve(&pool.token_b)
            .with_context(|| format!("{}: token_b is not in [[tokens]]", label))?;

        let launch = PoolLaunch {
            token_a: token_a.address.clone(),
            token_b: token_b.address.clone(),
            fee: pool.fee,
            ratio: pool.human_ratio()?,
        };
        let outcome = bootstrapper
            .launch_pool(&launch)
            .await
            .with_context(|| format!("Failed to launch {}", label))?;

        success(&format!("{}: pool {}", label, outcome.pool));
        info(&format!("sqrtPriceX96: {}", outcome.sqrt_price_x96));
        info(&format!("Price (token1 per token0): {}", outcome.human_price));

        let Some((amount_a, amount_b)) = pool.seed_amounts()? else {
            warn(&format!("{}: no seed amounts, skipping liquidity", label));
            continue;
        };
        let (amount0, amount1) = if outcome.flipped {
            (amount_b, amount_a)
        } else {
            (amount_a, amount_b)
        };

        let request = LiquidityRequest {
            pool: outcome.pool.clone(),
            range_half_width: pool.half_width(&config.liquidity),
            amount0_desired: amount0,
            amount1_desired: amount1,
            slippage_bps: config.liquidity.slippage_bps,
            recipient: config
                .liquidity
                .recipient
                .clone()
                .unwrap_or_else(|| DRY_RUN_RECIPIENT.to_string()),
            deadline: deadline_from_now(config.liquidity.deadline_secs),
        };
        let minted = bootstrapper
            .provide_liquidity(&request)
            .await
            .with_context(|| format!("Failed to add liquidity to {}", label))?;

        success(&format!(
            "{}: position #{} in {} around tick {}",
            label, minted.receipt.token_id, minted.window, minted.current_tick
        ));
    }

    Ok(())
}
