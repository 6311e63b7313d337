//! HTTP fetch probe.
//!
//! Issues a GET against the target and follows redirects by hand so the chain
//! can be bounded and every hop recorded. The client used here must have
//! automatic redirects disabled (see `initialization::init_probe_client`).

mod redirects;
mod request;

use std::time::Duration;

use crate::error_handling::ProbeError;
use crate::target::Target;

use redirects::{is_redirect, resolve_location, RedirectChain};
use request::send_get;

/// Result of a fetch, after any redirects were followed.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// Status code of the last response fetched
    pub status: u16,
    /// Round-trip time of the last exchange
    pub response_time: Duration,
    /// Redirect targets followed, in order. Each `Location` value is resolved
    /// against the URL that returned it, so relative locations appear absolute.
    pub redirect_urls: Vec<String>,
}

impl FetchOutcome {
    pub fn redirect_count(&self) -> usize {
        self.redirect_urls.len()
    }
}

/// Fetches `url`, following up to `redirect_limit` redirects.
///
/// A 3xx response is followed while fewer than `redirect_limit` hops have been
/// recorded; once the limit is reached, that 3xx response is returned as final.
/// A 3xx without a `Location` header is final too. 4xx and 5xx statuses are
/// ordinary results.
///
/// # Errors
///
/// Returns `ProbeError::Http` if a request cannot be built or the transport
/// fails (connection error, timeout), and `ProbeError::InvalidRedirect` if a
/// `Location` header cannot be turned into a URL.
pub async fn fetch(
    client: &reqwest::Client,
    target: &Target,
    url: &str,
    redirect_limit: usize,
) -> Result<FetchOutcome, ProbeError> {
    let mut chain = RedirectChain::new(redirect_limit);
    let mut current = url.to_string();

    loop {
        let exchange = send_get(client, target, &current).await?;
        log::debug!(
            "GET {current} -> {} in {:?} (hop {})",
            exchange.status,
            exchange.elapsed,
            chain.len()
        );

        let next = if is_redirect(exchange.status) {
            match exchange.location.as_deref() {
                Some(_) if !chain.has_room() => {
                    log::info!("Redirect limit ({redirect_limit}) reached at {current}");
                    None
                }
                Some(location) => Some(resolve_location(&current, location)?),
                None => {
                    log::warn!(
                        "Redirect status {} for {current} but no Location header",
                        exchange.status
                    );
                    None
                }
            }
        } else {
            None
        };

        let Some(next) = next else {
            return Ok(FetchOutcome {
                status: exchange.status,
                response_time: exchange.elapsed,
                redirect_urls: chain.into_urls(),
            });
        };

        chain.push(next.clone());
        current = next;
    }
}
