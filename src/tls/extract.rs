//! Certificate extraction utilities.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};

use crate::config::CERTIFICATE_EXPIRY_FORMAT;
use crate::models::TlsCertificate;

/// The facts we keep from a leaf certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeafCertificate {
    pub(crate) issuer: String,
    pub(crate) not_after: DateTime<Utc>,
}

/// Parses a DER-encoded X.509 certificate and pulls out issuer and expiry.
pub(crate) fn parse_leaf(der: &[u8]) -> Result<LeafCertificate> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| anyhow!("Failed to parse leaf certificate: {e}"))?;

    let timestamp = cert.validity().not_after.timestamp();
    let not_after = DateTime::<Utc>::from_timestamp(timestamp, 0)
        .ok_or_else(|| anyhow!("Certificate expiry out of range: {timestamp}"))?;

    Ok(LeafCertificate {
        issuer: cert.issuer().to_string(),
        not_after,
    })
}

/// Builds the reported certificate. Valid iff `not_after` is strictly after
/// `now`.
pub fn certificate_from_expiry(
    subject: &str,
    issuer: String,
    not_after: DateTime<Utc>,
    now: DateTime<Utc>,
) -> TlsCertificate {
    TlsCertificate {
        subject: subject.to_string(),
        issuer,
        expires: not_after.format(CERTIFICATE_EXPIRY_FORMAT).to_string(),
        is_valid: not_after > now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid test timestamp")
    }

    #[test]
    fn test_certificate_valid_before_expiry() {
        let now = instant();
        let cert = certificate_from_expiry(
            "example.com",
            "CN=Test CA".to_string(),
            now + Duration::days(30),
            now,
        );
        assert!(cert.is_valid);
        assert_eq!(cert.subject, "example.com");
        assert_eq!(cert.issuer, "CN=Test CA");
        assert_eq!(cert.expires, "2024-03-31 12:00:00");
    }

    #[test]
    fn test_certificate_invalid_after_expiry() {
        let now = instant();
        let cert = certificate_from_expiry(
            "example.com",
            "CN=Test CA".to_string(),
            now - Duration::seconds(1),
            now,
        );
        assert!(!cert.is_valid);
    }

    #[test]
    fn test_certificate_invalid_at_exact_expiry() {
        let now = instant();
        let cert = certificate_from_expiry("example.com", String::new(), now, now);
        assert!(!cert.is_valid, "expiry equal to now is not strictly after");
    }

    #[test]
    fn test_parse_leaf_rejects_garbage() {
        assert!(parse_leaf(b"definitely not DER").is_err());
        assert!(parse_leaf(&[]).is_err());
    }
}
