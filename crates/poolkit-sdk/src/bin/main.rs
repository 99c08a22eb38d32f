// CLI tool for launching concentrated liquidity pools
//
// Offline pricing and range helpers, the deployment registry, config
// validation, and a dry-run of the launch workflow.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use poolkit_sdk::logging::init_logging;
use poolkit_sdk::PoolkitConfig;

#[derive(Parser)]
#[command(name = "poolkit")]
#[command(about = "Pool launch toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level (overrides the config file; RUST_LOG overrides both)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price encoding and decoding
    Price(commands::price::PriceCmd),

    /// Tick window planning
    Range(commands::range::RangeCmd),

    /// Deployment address registry
    Registry(commands::registry::RegistryCmd),

    /// Configuration file checks
    Config(commands::config::ConfigCmd),

    /// Launch the configured pools
    Launch(commands::launch::LaunchCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Some(PoolkitConfig::from_file(path)?),
        None => None,
    };

    let defaults = config.clone().unwrap_or_default();
    let level = cli.log_level.as_deref().unwrap_or(defaults.logging.level.as_str());
    init_logging(level, defaults.logging.structured)?;

    // Execute command
    match cli.command {
        Commands::Price(cmd) => commands::price::execute(cmd),
        Commands::Range(cmd) => commands::range::execute(cmd),
        Commands::Registry(cmd) => commands::registry::execute(cmd, config.as_ref()),
        Commands::Config(cmd) => commands::config::execute(cmd, config.as_ref()),
        Commands::Launch(cmd) => commands::launch::execute(cmd, config.as_ref()).await,
    }
}
