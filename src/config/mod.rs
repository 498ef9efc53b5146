//! Configuration module for monitor settings and logging
//!
//! This module provides:
//! - Configuration types (`MonitorConfig`)
//! - Logging configuration (`init_logging`)

pub mod logging;
mod types;

// Re-export types
pub use types::{MonitorConfig, DEFAULT_ASSET_ID, DEFAULT_VS_CURRENCY};

// Re-export logging functions
pub use logging::init_logging;
