//! Single HTTP exchange.

use std::time::{Duration, Instant};

use crate::error_handling::ProbeError;
use crate::target::Target;

/// What one GET returned, minus the body.
#[derive(Debug)]
pub(crate) struct Exchange {
    pub(crate) status: u16,
    pub(crate) elapsed: Duration,
    pub(crate) location: Option<String>,
}

/// Sends one GET to `url` and times it until the response headers arrive.
///
/// The User-Agent comes from the client. Basic auth is added when the target
/// carries both a username and a password. The response is dropped before
/// returning, which closes the connection (the probe client keeps no idle
/// connections).
pub(crate) async fn send_get(
    client: &reqwest::Client,
    target: &Target,
    url: &str,
) -> Result<Exchange, ProbeError> {
    let http_error = |source| ProbeError::Http {
        url: url.to_string(),
        source,
    };

    let mut builder = client.get(url);
    if let Some((username, password)) = target.credentials() {
        builder = builder.basic_auth(username, Some(password));
    }
    let request = builder.build().map_err(http_error)?;

    let start = Instant::now();
    let response = client.execute(request).await.map_err(http_error)?;
    let elapsed = start.elapsed();

    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    Ok(Exchange {
        status: response.status().as_u16(),
        elapsed,
        location,
    })
}
