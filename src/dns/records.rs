//! DNS record queries (MX, TXT, A, CNAME, NS, SRV).
//!
//! Every function returns the records as strings, or an empty vector when the
//! lookup fails for any reason. Failures are logged, never returned.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Queries MX (mail exchanger) records for a host.
///
/// # Returns
///
/// Exchange hostnames sorted by preference (lower = higher priority).
pub async fn lookup_mx(resolver: &TokioAsyncResolver, host: &str) -> Vec<String> {
    match resolver.lookup(host, RecordType::MX).await {
        Ok(lookup) => {
            let mut mx_records: Vec<(u16, String)> = lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::MX(mx) => Some((mx.preference(), mx.exchange().to_utf8())),
                    _ => None,
                })
                .collect();
            mx_records.sort_by_key(|(priority, _)| *priority);
            mx_records.into_iter().map(|(_, host)| host).collect()
        }
        Err(e) => empty_after_failure("MX", host, &e),
    }
}

/// Queries TXT (text) records for a host.
///
/// A TXT record made of several character strings is returned as one string.
pub async fn lookup_txt(resolver: &TokioAsyncResolver, host: &str) -> Vec<String> {
    match resolver.lookup(host, RecordType::TXT).await {
        Ok(lookup) => lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::TXT(txt) => Some(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join(""),
                ),
                _ => None,
            })
            .collect(),
        Err(e) => empty_after_failure("TXT", host, &e),
    }
}

/// Resolves the addresses of a host (IPv4 and IPv6).
pub async fn lookup_a(resolver: &TokioAsyncResolver, host: &str) -> Vec<String> {
    match resolver.lookup_ip(host).await {
        Ok(lookup) => lookup.iter().map(|ip| ip.to_string()).collect(),
        Err(e) => empty_after_failure("A", host, &e),
    }
}

/// Resolves the canonical name of a host.
///
/// The host's addresses are resolved and the owner name of the address
/// records is reported: the end of the CNAME chain, or the host itself when it
/// has no alias.
///
/// # Returns
///
/// A single-element vector holding the fully-qualified canonical name, or an
/// empty vector when the host does not resolve.
pub async fn lookup_cname(resolver: &TokioAsyncResolver, host: &str) -> Vec<String> {
    match resolver.lookup_ip(host).await {
        Ok(lookup) => {
            let lookup = lookup.as_lookup();
            let canonical = lookup
                .records()
                .iter()
                .find(|record| matches!(record.data(), Some(RData::A(_) | RData::AAAA(_))))
                .map(|record| record.name().to_utf8())
                .unwrap_or_else(|| lookup.query().name().to_utf8());
            vec![canonical]
        }
        Err(e) => empty_after_failure("CNAME", host, &e),
    }
}

/// Queries NS (nameserver) records for a host.
pub async fn lookup_ns(resolver: &TokioAsyncResolver, host: &str) -> Vec<String> {
    match resolver.lookup(host, RecordType::NS).await {
        Ok(lookup) => lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::NS(ns) => Some(ns.0.to_utf8()),
                _ => None,
            })
            .collect(),
        Err(e) => empty_after_failure("NS", host, &e),
    }
}

/// Queries SRV records published directly at a host.
///
/// # Returns
///
/// One `target:port` string per record.
pub async fn lookup_srv(resolver: &TokioAsyncResolver, host: &str) -> Vec<String> {
    match resolver.lookup(host, RecordType::SRV).await {
        Ok(lookup) => lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::SRV(srv) => Some(format!("{}:{}", srv.target().to_utf8(), srv.port())),
                _ => None,
            })
            .collect(),
        Err(e) => empty_after_failure("SRV", host, &e),
    }
}

/// Logs a failed lookup and returns the empty result that stands for it.
fn empty_after_failure(kind: &str, host: &str, e: &ResolveError) -> Vec<String> {
    match e.kind() {
        // Expected for most hosts and most record types
        ResolveErrorKind::NoRecordsFound { .. } => {
            log::debug!("No {kind} records for {host}");
        }
        ResolveErrorKind::Timeout => {
            log::warn!("{kind} record lookup timed out for {host}");
        }
        _ => {
            log::warn!("Failed to lookup {kind} records for {host}: {e}");
        }
    }
    Vec::new()
}
