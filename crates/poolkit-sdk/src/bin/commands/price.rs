// Price encoding commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use num_bigint::BigUint;
use poolkit_sdk::poolkit_core::{encode, sort_tokens, EncodedPrice, HumanRatio, TokenAddress, TokenDescriptor};
use poolkit_sdk::testing::approximate_tick;

use super::utils::{info, success};

#[derive(Args)]
pub struct PriceCmd {
    #[command(subcommand)]
    command: PriceSubcommand,
}

#[derive(Subcommand)]
enum PriceSubcommand {
    /// Encode `1 token_a = ratio token_b` as a sqrt price
    Encode {
        /// First token address
        #[arg(long)]
        token_a: String,

        /// First token decimals
        #[arg(long)]
        decimals_a: u8,

        /// Second token address
        #[arg(long)]
        token_b: String,

        /// Second token decimals
        #[arg(long)]
        decimals_b: u8,

        /// Amount of token_b per token_a, e.g. 4000, 0.00025 or 1/3
        #[arg(long)]
        ratio: String,
    },

    /// Decode a sqrt price back to a price
    Decode {
        /// Q64.96 sqrt price
        #[arg(long)]
        sqrt_price_x96: String,

        /// token0 decimals
        #[arg(long, requires = "decimals1")]
        decimals0: Option<u8>,

        /// token1 decimals
        #[arg(long, requires = "decimals0")]
        decimals1: Option<u8>,
    },
}

pub fn execute(cmd: PriceCmd) -> Result<()> {
    match cmd.command {
        PriceSubcommand::Encode {
            token_a,
            decimals_a,
            token_b,
            decimals_b,
            ratio,
        } => {
            let token_a = TokenDescriptor::new(TokenAddress::new(&token_a)?, decimals_a);
            let token_b = TokenDescriptor::new(TokenAddress::new(&token_b)?, decimals_b);
            let ratio: HumanRatio = ratio.parse().context("Invalid ratio")?;

            let encoded = encode(&token_a, &token_b, &ratio)?;
            let pair = sort_tokens(&token_a, &token_b)?;

            success(&format!("sqrtPriceX96: {}", encoded));
            info(&format!("token0: {}", pair.token0.address));
            info(&format!("token1: {}", pair.token1.address));
            if pair.flipped {
                info("Input order was flipped; ratio inverted for the pool");
            }
            info(&format!(
                "Price (token1 per token0): {}",
                encoded.human_price(pair.token0.decimals, pair.token1.decimals)
            ));
            info(&format!("Tick (approx): {}", approximate_tick(encoded.sqrt_price_x96())));

            Ok(())
        }

        PriceSubcommand::Decode {
            sqrt_price_x96,
            decimals0,
            decimals1,
        } => {
            let raw: BigUint = sqrt_price_x96
                .trim()
                .parse()
                .context("sqrt price must be a non-negative integer")?;
            let encoded = EncodedPrice::from_sqrt_price_x96(raw)?;

            success(&format!("Raw price (token1 per token0, base units): {}", encoded.raw_price()));
            if let (Some(d0), Some(d1)) = (decimals0, decimals1) {
                info(&format!("Price (token1 per token0): {}", encoded.human_price(d0, d1)));
            }
            info(&format!("Tick (approx): {}", approximate_tick(encoded.sqrt_price_x96())));

            Ok(())
        }
    }
}
