/// Poolkit SDK
///
/// Orchestration around an external concentrated liquidity protocol.
/// Provides high-level abstractions for:
/// - Pool creation and price initialization
/// - Liquidity provision in a tick window around the current price
/// - Deployment address bookkeeping
/// - Configuration and logging for the `poolkit` CLI
///
/// All chain access goes through the traits in [`gateway`]; pricing comes from
/// `poolkit-core`.
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod registry;
pub mod testing;
pub mod utils;

pub use bootstrap::*;
pub use config::*;
pub use error::*;
pub use gateway::*;
pub use registry::*;

// Re-export the pricing core
pub use poolkit_core;
