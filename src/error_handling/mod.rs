//! Error handling.
//!
//! Error kinds are split by how far they travel:
//! - **Fatal**: `CollectError` (target parsing), returned by `collect_*`
//! - **Non-fatal**: `ProbeError` (ping, fetch), kept as report messages
//! - **Setup**: `InitializationError` (logger, HTTP client, settings file)
//!
//! DNS misses and failed TLS handshakes have no error type at all; they show up
//! as empty record lists and a zero-value certificate.

mod types;

// Re-export public API
pub use types::{CollectError, InitializationError, ProbeError, TargetParseError};
