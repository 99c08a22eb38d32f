// Deployment registry commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use poolkit_sdk::{AddressRegistry, JsonFileRegistry, PoolkitConfig, RegistryConfig};

use super::utils::{info, success, warn};

#[derive(Args)]
pub struct RegistryCmd {
    /// Registry file (defaults to `[registry].path`)
    #[arg(long, global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: RegistrySubcommand,
}

#[derive(Subcommand)]
enum RegistrySubcommand {
    /// List all entries
    List,

    /// Look up one entry
    Get {
        key: String,
    },

    /// Record an address
    Set {
        key: String,
        address: String,
    },
}

pub fn execute(cmd: RegistryCmd, config: Option<&PoolkitConfig>) -> Result<()> {
    let path = cmd.path.unwrap_or_else(|| {
        let registry = config.map(|c| c.registry.clone()).unwrap_or_else(RegistryConfig::default);
        PathBuf::from(registry.path)
    });
    let registry = JsonFileRegistry::new(&path);

    match cmd.command {
        RegistrySubcommand::List => {
            let entries = registry
                .entries()
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if entries.is_empty() {
                warn(&format!("No entries in {}", path.display()));
            }
            for (key, address) in entries {
                info(&format!("{} = {}", key, address));
            }
            Ok(())
        }

        RegistrySubcommand::Get { key } => {
            match registry.get(&key)? {
                Some(address) => success(&format!("{} = {}", key, address)),
                None => anyhow::bail!("No entry for '{}' in {}", key, path.display()),
            }
            Ok(())
        }

        RegistrySubcommand::Set { key, address } => {
            registry.set(&key, address.trim())?;
            success(&format!("{} = {} written to {}", key, address.trim(), path.display()));
            Ok(())
        }
    }
}
