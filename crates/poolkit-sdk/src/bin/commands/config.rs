// Configuration commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use poolkit_sdk::poolkit_core::{encode, sort_tokens};
use poolkit_sdk::{ConfiguredTokens, PoolkitConfig};

use super::utils::{info, require_config, success};

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Validate the config and print each pool's encoded price
    Check,
}

pub fn execute(cmd: ConfigCmd, config: Option<&PoolkitConfig>) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Check => {
            let config = require_config(config, "config check")?;
            let tokens = ConfiguredTokens::from_config(&config.tokens)?;

            success(&format!(
                "Config valid: {} tokens, {} pools",
                config.tokens.len(),
                config.pools.len()
            ));
            info(&format!("Registry: {}", config.registry.path));

            for pool in &config.pools {
                let label = format!("{}/{} ({})", pool.token_a, pool.token_b, pool.fee);
                let meta_a = tokens
                    .resolve(&pool.token_a)
                    .with_context(|| format!("{}: token_a is not in [[tokens]]", label))?;
                let meta_b = tokens
                    .resolve(&pool.token_b)
                    .with_context(|| format!("{}: token_b is not in [[tokens]]", label))?;
                let token_a = meta_a.descriptor()?;
                let token_b = meta_b.descriptor()?;

                let encoded = encode(&token_a, &token_b, &pool.human_ratio()?)
                    .with_context(|| format!("{}: price cannot be encoded", label))?;
                let pair = sort_tokens(&token_a, &token_b)?;

                info(&format!(
                    "{}: sqrtPriceX96 = {}, token0 = {}, half width = {}",
                    label,
                    encoded,
                    pair.token0.address,
                    pool.half_width(&config.liquidity)
                ));
            }

            Ok(())
        }
    }
}
