//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - CLI arguments parsing
//! - User configuration files

pub mod cli;
pub mod user_config;

pub use cli::CliArgs;
pub use user_config::ConfigFile;
