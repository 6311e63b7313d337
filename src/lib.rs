//! hostinfo library: one-shot diagnostics for a single host
//!
//! This library probes a host given as a bare domain, an IP address, or a full
//! URL, and gathers the results into a single [`Report`]:
//! - TCP reachability latency
//! - HTTP status and latency, with a bounded, recorded redirect chain
//! - TLS certificate subject, issuer, expiry, and trust
//! - DNS records (MX, TXT, A, CNAME, NS, SRV)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use hostinfo::{Collector, Settings};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings {
//!     redirect_limit: 5,
//!     ..Default::default()
//! };
//!
//! let collector = Collector::new(Arc::new(settings))?;
//! let report = collector.collect_all("example.com").await?;
//! println!("{}", hostinfo::export::report_to_json(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod collect;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod ping;
pub mod target;
pub mod tls;
mod utils;

// Re-export public API
pub use collect::Collector;
pub use config::{LogFormat, LogLevel, Settings};
pub use error_handling::{CollectError, InitializationError, ProbeError, TargetParseError};
pub use models::{DnsRecordType, DnsRecords, Report, TlsCertificate};
pub use target::{ParsedTarget, Target};
