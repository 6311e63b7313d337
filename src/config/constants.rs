//! Configuration constants.
//!
//! Defaults for every `Settings` field plus the timeouts used by the probes.

/// Port used when the target does not name one.
pub const DEFAULT_PORT: u16 = 443;

/// Protocol (URL scheme) used when the target does not name one.
pub const DEFAULT_PROTOCOL: &str = "https";

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for HTTP requests.
///
/// A desktop Chrome identifier. Users can override it via `--user-agent` or the
/// `default_user_agent` key of a settings file.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.114 Safari/537.36";

// Network operation timeouts
/// TCP connect timeout for the reachability probe in seconds
pub const PING_TIMEOUT_SECS: u64 = 30;
/// Per-request HTTP timeout in seconds (applies to every redirect hop)
pub const HTTP_TIMEOUT_SECS: u64 = 30;
/// TCP connect + TLS handshake timeout for certificate inspection in seconds
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 10;
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Port dialed by the certificate inspector, whatever the target's port is.
pub const TLS_INSPECTION_PORT: u16 = 443;

/// Timestamp layout of `TlsCertificate::expires`.
pub const CERTIFICATE_EXPIRY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
