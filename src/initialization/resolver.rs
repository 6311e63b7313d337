//! DNS resolver initialization.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::Settings;

/// Initializes the DNS resolver for record lookups.
///
/// Uses the operating system resolver configuration (`/etc/resolv.conf` on
/// Unix, the registry on Windows). If that cannot be read, falls back to the
/// library default upstreams so lookups still work.
///
/// Timeouts come from `Settings` so one unresponsive server cannot hold a
/// collection for long.
pub fn init_resolver(settings: &Settings) -> TokioAsyncResolver {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Cannot read system DNS configuration ({e}), using default resolvers");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = settings.dns_timeout();
    opts.attempts = 2;

    TokioAsyncResolver::tokio(config, opts)
}
