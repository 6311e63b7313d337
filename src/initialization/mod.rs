//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - HTTP client for the fetch probe
//! - DNS resolver
//! - rustls crypto provider

mod client;
mod logger;
mod resolver;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use client::init_probe_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the crypto provider for TLS operations.
///
/// Installs `ring` as the process-wide default provider for `rustls`. The
/// certificate inspector picks its provider explicitly, so this only matters
/// for code that relies on the global default.
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
