//! TCP reachability probe.
//!
//! "Ping" here is the time it takes to establish a TCP connection, not ICMP.
//! The connection is closed as soon as it is established.

use std::time::{Duration, Instant};

use tokio::net::TcpStream;

use crate::error_handling::ProbeError;

/// Measures how long it takes to connect to `host:port`.
///
/// The socket is dropped before returning, on success and on every error path.
///
/// # Errors
///
/// Returns `ProbeError::Connect` if the connection is refused, the host cannot
/// be resolved, or `timeout` elapses first.
pub async fn ping(host: &str, port: u16, timeout: Duration) -> Result<Duration, ProbeError> {
    let address = format!("{host}:{port}");
    log::debug!("Connecting to {address}");

    let start = Instant::now();
    let stream = match tokio::time::timeout(timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            log::warn!("TCP connection to {address} failed: {e}");
            return Err(ProbeError::Connect {
                address,
                reason: e.to_string(),
            });
        }
        Err(_) => {
            log::warn!("TCP connection to {address} timed out");
            return Err(ProbeError::Connect {
                address,
                reason: format!("timed out after {}s", timeout.as_secs_f64()),
            });
        }
    };
    let elapsed = start.elapsed();
    drop(stream);

    log::debug!("Connected to {address} in {elapsed:?}");
    Ok(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_ping_open_port() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let port = listener.local_addr().expect("listener has address").port();

        let elapsed = ping("127.0.0.1", port, Duration::from_secs(5))
            .await
            .expect("ping to a listening port should succeed");
        assert!(elapsed < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_ping_closed_port() {
        // Bind then drop to get a port nobody listens on
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            listener.local_addr().expect("listener has address").port()
        };

        let err = ping("127.0.0.1", port, Duration::from_secs(5))
            .await
            .expect_err("ping to a closed port should fail");
        match err {
            ProbeError::Connect { address, .. } => {
                assert_eq!(address, format!("127.0.0.1:{port}"));
            }
            other => panic!("expected Connect error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ping_unresolvable_host() {
        let result = ping("definitely-does-not-exist-12345.invalid", 443, Duration::from_secs(5)).await;
        assert!(matches!(result, Err(ProbeError::Connect { .. })));
    }

    #[tokio::test]
    async fn test_ping_timeout_is_a_connect_error() {
        // A hostname needs a blocking lookup first, so a zero budget always runs out
        let err = ping("localhost", 9, Duration::ZERO)
            .await
            .expect_err("a zero timeout cannot be met");
        match err {
            ProbeError::Connect { address, reason } => {
                assert_eq!(address, "localhost:9");
                assert!(reason.contains("timed out"), "reason: {reason}");
            }
            other => panic!("expected Connect error, got {other:?}"),
        }
    }
}
