// Command modules for poolkit CLI

pub mod config;
pub mod launch;
pub mod price;
pub mod range;
pub mod registry;
pub mod utils;
