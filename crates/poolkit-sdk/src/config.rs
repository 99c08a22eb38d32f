//! Configuration management for pool launches

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

use poolkit_core::{FeeTier, HumanRatio, TokenAddress, DEFAULT_RANGE_HALF_WIDTH};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct PoolkitConfig {
    #[validate]
    pub logging: LoggingConfig,
    #[validate]
    pub registry: RegistryConfig,
    #[validate]
    pub liquidity: LiquidityConfig,
    #[validate]
    pub tokens: Vec<TokenConfig>,
    #[validate]
    pub pools: Vec<PoolConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    #[validate(length(min = 1))]
    pub level: String,
    pub structured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegistryConfig {
    /// JSON file holding deployed addresses
    #[validate(length(min = 1))]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LiquidityConfig {
    /// Ticks on each side of the current tick
    #[validate(range(min = 1, max = 887272))]
    pub range_half_width: u32,
    #[validate(range(max = 10000))]
    pub slippage_bps: u16,
    #[validate(range(min = 30, max = 86400))]
    pub deadline_secs: u64,
    /// Position owner; defaults to the signer when unset
    pub recipient: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TokenConfig {
    #[validate(length(min = 1))]
    pub address: String,
    pub symbol: Option<String>,
    #[validate(range(max = 77))]
    pub decimals: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PoolConfig {
    /// Symbol or address; the ratio is quoted from this token's side
    #[validate(length(min = 1))]
    pub token_a: String,
    #[validate(length(min = 1))]
    pub token_b: String,
    pub fee: u32,
    /// 1 token_a = `ratio` token_b, e.g. "4000", "0.00025" or "1/3"
    #[validate(length(min = 1))]
    pub ratio: String,
    /// Overrides `[liquidity].range_half_width` for this pool
    #[validate(range(min = 1, max = 887272))]
    pub range_half_width: Option<u32>,
    /// Base-unit amount of token_a to seed, as a decimal string
    pub amount_a: Option<String>,
    /// Base-unit amount of token_b to seed, as a decimal string
    pub amount_b: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            structured: false,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: "./deployments.json".to_string(),
        }
    }
}

impl Default for LiquidityConfig {
    fn default() -> Self {
        Self {
            range_half_width: DEFAULT_RANGE_HALF_WIDTH,
            slippage_bps: 50,
            deadline_secs: 1200,
            recipient: None,
        }
    }
}

impl PoolConfig {
    pub fn fee_tier(&self) -> Result<FeeTier> {
        FeeTier::try_from(self.fee).with_context(|| format!("pool {}/{}", self.token_a, self.token_b))
    }

    pub fn human_ratio(&self) -> Result<HumanRatio> {
        self.ratio
            .parse::<HumanRatio>()
            .with_context(|| format!("pool {}/{}", self.token_a, self.token_b))
    }

    pub fn half_width(&self, defaults: &LiquidityConfig) -> u32 {
        self.range_half_width.unwrap_or(defaults.range_half_width)
    }

    /// Seed amounts, if both sides are configured
    pub fn seed_amounts(&self) -> Result<Option<(u128, u128)>> {
        match (&self.amount_a, &self.amount_b) {
            (Some(a), Some(b)) => Ok(Some((parse_amount(a)?, parse_amount(b)?))),
            (None, None) => Ok(None),
            _ => anyhow::bail!(
                "pool {}/{}: amount_a and amount_b must be set together",
                self.token_a,
                self.token_b
            ),
        }
    }
}

fn parse_amount(raw: &str) -> Result<u128> {
    raw.trim()
        .replace('_', "")
        .parse::<u128>()
        .with_context(|| format!("invalid base-unit amount '{}'", raw))
}

impl PoolkitConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        Validate::validate(&config)?;
        config.check()?;

        Ok(config)
    }

    /// Semantic checks the validator attributes cannot express
    pub fn check(&self) -> Result<()> {
        for token in &self.tokens {
            TokenAddress::new(&token.address)
                .with_context(|| format!("token {:?}", token.symbol))?;
        }
        for pool in &self.pools {
            pool.fee_tier()?;
            pool.human_ratio()?;
            pool.seed_amounts()?;
            if pool.token_a.trim().eq_ignore_ascii_case(pool.token_b.trim()) {
                anyhow::bail!("pool {}/{}: tokens must differ", pool.token_a, pool.token_b);
            }
        }
        Ok(())
    }
}
