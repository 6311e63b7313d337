//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default port/protocol, redirect limit, timeouts)
//! - The process-wide `Settings` type
//! - Logging option types used by the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Settings};
