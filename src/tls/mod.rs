//! TLS certificate inspection.
//!
//! Connects to port 443 of a host with full chain and hostname verification
//! (webpki roots) and reports the leaf certificate's issuer and expiry.
//!
//! Uses `tokio-rustls` for async TLS connections and `x509-parser` for
//! certificate parsing. A host without TLS, or with a certificate that fails
//! verification, is a normal outcome: it yields the zero-value
//! `TlsCertificate`, never an error.

mod extract;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use rustls::crypto::ring::default_provider;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::TLS_INSPECTION_PORT;
use crate::models::TlsCertificate;

pub use extract::certificate_from_expiry;
use extract::{parse_leaf, LeafCertificate};

/// Inspects the certificate `host` presents on port 443.
///
/// `timeout` bounds the TCP connect and the TLS handshake separately.
/// Any failure is logged and turned into `TlsCertificate::default()`.
pub async fn inspect_certificate(host: &str, timeout: Duration) -> TlsCertificate {
    match fetch_leaf_certificate(host, timeout).await {
        Ok(leaf) => {
            let cert = certificate_from_expiry(host, leaf.issuer, leaf.not_after, Utc::now());
            log::debug!(
                "Certificate for {host}: issuer '{}', expires {}, valid {}",
                cert.issuer,
                cert.expires,
                cert.is_valid
            );
            cert
        }
        Err(e) => {
            log::info!("No verified TLS certificate for {host}: {e:#}");
            TlsCertificate::default()
        }
    }
}

async fn fetch_leaf_certificate(host: &str, timeout: Duration) -> Result<LeafCertificate> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder_with_provider(Arc::new(default_provider()))
        .with_safe_default_protocol_versions()
        .context("Failed to configure TLS protocol versions")?
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| anyhow!("Invalid domain name {host}: {e}"))?;

    let sock = tokio::time::timeout(timeout, TcpStream::connect((host, TLS_INSPECTION_PORT)))
        .await
        .map_err(|_| {
            anyhow!(
                "TCP connection timeout for {host}:{TLS_INSPECTION_PORT} ({}s)",
                timeout.as_secs_f64()
            )
        })?
        .with_context(|| format!("Failed to connect to {host}:{TLS_INSPECTION_PORT}"))?;

    let connector = TlsConnector::from(Arc::new(config));
    let tls_stream = tokio::time::timeout(timeout, connector.connect(server_name, sock))
        .await
        .map_err(|_| {
            anyhow!(
                "TLS handshake timeout for {host} ({}s)",
                timeout.as_secs_f64()
            )
        })?
        .with_context(|| format!("TLS handshake failed for {host}"))?;

    let leaf = tls_stream
        .get_ref()
        .1
        .peer_certificates()
        .and_then(|certs| certs.first())
        .ok_or_else(|| anyhow!("{host} presented no certificate"))?;

    parse_leaf(leaf.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inspect_unresolvable_host_is_zero_value() {
        let cert =
            inspect_certificate("definitely-does-not-exist-12345.invalid", Duration::from_secs(5))
                .await;
        assert!(cert.is_empty());
        assert!(!cert.is_valid);
    }

    #[tokio::test]
    async fn test_inspect_invalid_name_is_zero_value() {
        let cert = inspect_certificate("not a hostname", Duration::from_secs(1)).await;
        assert_eq!(cert, TlsCertificate::default());
    }

    #[tokio::test]
    #[ignore] // Requires internet access
    async fn test_inspect_real_certificate() {
        let cert = inspect_certificate("example.com", Duration::from_secs(10)).await;
        assert_eq!(cert.subject, "example.com");
        assert!(!cert.issuer.is_empty());
        assert!(cert.is_valid);
    }

    #[tokio::test]
    #[ignore] // Requires internet access
    async fn test_inspect_expired_certificate() {
        // badssl.com keeps an expired certificate online; verification rejects it
        let cert = inspect_certificate("expired.badssl.com", Duration::from_secs(10)).await;
        assert!(cert.is_empty());
    }
}
