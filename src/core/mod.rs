//! Core application functionality
//!
//! This module contains the core pipeline logic, including:
//! - Code point allocation
//! - Settings and CLI handling
//! - Error types and reporting
//! - The pipeline driver

pub mod allocator;
pub mod config;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use allocator::{allocate, ResolvedGlyph};
pub use config::{CliArgs, ConfigFile};
pub use errors::{BackendError, IconFontError, ImportError};
pub use runner::{run_app, Pipeline, RunReport, Stage};
