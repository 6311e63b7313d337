//! Configuration types.
//!
//! `Settings` is the process-wide probe configuration. `LogLevel` and
//! `LogFormat` are the CLI-facing logging knobs.

use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_PORT, DEFAULT_PROTOCOL, DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS, HTTP_TIMEOUT_SECS,
    MAX_REDIRECT_HOPS, PING_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS,
};
use crate::error_handling::InitializationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Process-wide probe settings.
///
/// Built once at startup (defaults, a settings file, CLI overrides) and then
/// shared read-only, usually behind an `Arc`. Nothing in a collection writes
/// to it.
///
/// # Examples
///
/// ```
/// use hostinfo::Settings;
///
/// let settings = Settings {
///     redirect_limit: 3,
///     ..Default::default()
/// };
/// assert_eq!(settings.default_port, 443);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Port applied when the target has none
    pub default_port: u16,

    /// Protocol applied when the target has none
    pub default_protocol: String,

    /// Maximum number of redirects the fetch probe follows
    pub redirect_limit: usize,

    /// User-Agent header sent by the fetch probe
    pub default_user_agent: String,

    /// TCP connect timeout of the reachability probe, in seconds
    pub ping_timeout_secs: u64,

    /// Per-hop HTTP timeout, in seconds
    pub http_timeout_secs: u64,

    /// TLS connect + handshake timeout, in seconds
    pub tls_timeout_secs: u64,

    /// DNS query timeout, in seconds
    pub dns_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_port: DEFAULT_PORT,
            default_protocol: DEFAULT_PROTOCOL.to_string(),
            redirect_limit: MAX_REDIRECT_HOPS,
            default_user_agent: DEFAULT_USER_AGENT.to_string(),
            ping_timeout_secs: PING_TIMEOUT_SECS,
            http_timeout_secs: HTTP_TIMEOUT_SECS,
            tls_timeout_secs: TLS_HANDSHAKE_TIMEOUT_SECS,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file. Keys missing from the file keep their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::SettingsError` if the file cannot be read
    /// or is not valid JSON for this structure.
    pub fn from_file(path: &Path) -> Result<Self, InitializationError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InitializationError::SettingsError(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            InitializationError::SettingsError(format!("invalid settings in {}: {e}", path.display()))
        })
    }

    pub fn ping_timeout(&self) -> Duration {
        Duration::from_secs(self.ping_timeout_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn tls_timeout(&self) -> Duration {
        Duration::from_secs(self.tls_timeout_secs)
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }
}
