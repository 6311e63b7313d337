//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::Settings;

/// Initializes the HTTP client used by the fetch probe.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from settings
/// - Per-request timeout from settings
/// - Redirects disabled (the fetch probe follows and records them itself)
/// - Certificate verification disabled (trust is judged by the TLS inspector,
///   the fetch only measures availability and latency)
/// - No idle connection pooling, so every exchange closes its connection
///
/// The client is meant to live for one collection and be dropped with it.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_probe_client(settings: &Settings) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .danger_accept_invalid_certs(true)
        .pool_max_idle_per_host(0)
        .timeout(settings.http_timeout())
        .user_agent(settings.default_user_agent.clone())
        .build()
}
