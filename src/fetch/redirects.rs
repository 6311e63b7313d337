//! Redirect chain bookkeeping.
//!
//! A `RedirectChain` is created per fetch and owned by it, so concurrent
//! fetches never see each other's hops.

use reqwest::Url;

use crate::error_handling::ProbeError;

/// Redirect targets followed so far, bounded by a limit.
#[derive(Debug, Clone)]
pub(crate) struct RedirectChain {
    limit: usize,
    urls: Vec<String>,
}

impl RedirectChain {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            urls: Vec::new(),
        }
    }

    /// Whether another hop may still be followed.
    pub(crate) fn has_room(&self) -> bool {
        self.urls.len() < self.limit
    }

    /// Records a hop. Returns `false` (and records nothing) once the limit is
    /// reached.
    pub(crate) fn push(&mut self, url: String) -> bool {
        if !self.has_room() {
            return false;
        }
        self.urls.push(url);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.urls.len()
    }

    pub(crate) fn into_urls(self) -> Vec<String> {
        self.urls
    }
}

/// Whether `status` asks the client to look elsewhere.
pub(crate) fn is_redirect(status: u16) -> bool {
    (300..400).contains(&status)
}

/// Resolves a `Location` header value against the URL that returned it.
/// Absolute locations are returned as parsed; relative ones are joined.
pub(crate) fn resolve_location(current: &str, location: &str) -> Result<String, ProbeError> {
    Url::parse(location)
        .or_else(|_| Url::parse(current).and_then(|base| base.join(location)))
        .map(|url| url.to_string())
        .map_err(|_| ProbeError::InvalidRedirect {
            from: current.to_string(),
            location: location.to_string(),
        })
}
