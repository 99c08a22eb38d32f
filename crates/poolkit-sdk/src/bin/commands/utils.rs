// Utility functions for CLI commands

use anyhow::{Context, Result};
use poolkit_sdk::PoolkitConfig;

/// Config passed via `--config`, or an error naming the command
pub fn require_config<'a>(config: Option<&'a PoolkitConfig>, command: &str) -> Result<&'a PoolkitConfig> {
    config.with_context(|| format!("`{}` needs --config <FILE>", command))
}

/// Print success message with checkmark
pub fn success(msg: &str) {
    println!("[OK] {}", msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("[INFO] {}", msg);
}

/// Print warning message
pub fn warn(msg: &str) {
    eprintln!("[WARN] {}", msg);
}
