// Tick window commands

use anyhow::Result;
use clap::{Args, Subcommand};
use poolkit_sdk::poolkit_core::{plan, FeeTier, DEFAULT_RANGE_HALF_WIDTH};

use super::utils::{info, success};

#[derive(Args)]
pub struct RangeCmd {
    #[command(subcommand)]
    command: RangeSubcommand,
}

#[derive(Subcommand)]
enum RangeSubcommand {
    /// Plan a tick window around a tick
    Plan {
        /// Fee tier (500, 3000 or 10000)
        #[arg(long)]
        fee: u32,

        /// Current pool tick
        #[arg(long, allow_hyphen_values = true)]
        tick: i32,

        /// Ticks on each side of the current tick
        #[arg(long, default_value_t = DEFAULT_RANGE_HALF_WIDTH)]
        half_width: u32,
    },
}

pub fn execute(cmd: RangeCmd) -> Result<()> {
    match cmd.command {
        RangeSubcommand::Plan {
            fee,
            tick,
            half_width,
        } => {
            let window = plan(fee, tick, half_width)?;
            let tier = FeeTier::try_from(fee)?;

            success(&format!("Window: {}", window));
            info(&format!("tick_lower: {}", window.tick_lower));
            info(&format!("tick_upper: {}", window.tick_upper));
            info(&format!("Tick spacing: {}", tier.tick_spacing()));
            info(&format!("Width: {} ticks", window.width()));

            Ok(())
        }
    }
}
