//! Report data model.
//!
//! A `Report` is produced once per collection and never touched again by this
//! crate. Optional fields are left out of the JSON when a probe did not run or
//! did not succeed.

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::target::Target;

/// TLS certificate facts for the probed host.
///
/// `TlsCertificate::default()` (all fields empty, `is_valid == false`) means
/// the host offered no TLS or a certificate that failed verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TlsCertificate {
    /// Hostname the certificate was verified for
    pub subject: String,
    /// Issuer distinguished name, e.g. `C=US, O=Let's Encrypt, CN=R3`
    pub issuer: String,
    /// Leaf certificate expiry, `YYYY-MM-DD HH:MM:SS` in UTC
    pub expires: String,
    /// `true` iff the expiry is strictly after the inspection time
    pub is_valid: bool,
}

impl TlsCertificate {
    /// Whether this is the zero value (no certificate was inspected).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// DNS records of the probed host, one list per record type.
///
/// A list is empty when the lookup failed or found nothing; the two cases are
/// not distinguished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DnsRecords {
    pub mx: Vec<String>,
    pub txt: Vec<String>,
    pub a: Vec<String>,
    pub cname: Vec<String>,
    pub ns: Vec<String>,
    pub srv: Vec<String>,
}

impl DnsRecords {
    /// Mutable access to the list holding `kind`.
    pub fn records_mut(&mut self, kind: DnsRecordType) -> &mut Vec<String> {
        match kind {
            DnsRecordType::Mx => &mut self.mx,
            DnsRecordType::Txt => &mut self.txt,
            DnsRecordType::A => &mut self.a,
            DnsRecordType::Cname => &mut self.cname,
            DnsRecordType::Ns => &mut self.ns,
            DnsRecordType::Srv => &mut self.srv,
        }
    }
}

/// The six record types the DNS probe knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DnsRecordType {
    Mx,
    Txt,
    A,
    Cname,
    Ns,
    Srv,
}

/// Aggregated result of one collection against one target.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the collection started (UTC)
    pub request_timestamp: DateTime<Utc>,
    /// The resolved target
    pub url: Target,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<u16>,
    /// Milliseconds for the last HTTP exchange of the redirect chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_response_time: Option<f64>,
    pub redirect_count: usize,
    /// Redirect targets actually followed, in order
    pub redirect_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_certificate: Option<TlsCertificate>,
    /// Milliseconds to establish the TCP connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns: Option<DnsRecords>,
    /// Messages from probes that failed without aborting the collection
    pub errors: Vec<String>,
}
