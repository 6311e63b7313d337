//! DNS record lookups.
//!
//! This module provides async DNS queries using `hickory-resolver`, one per
//! record type (MX, TXT, A, CNAME, NS, SRV), plus helpers to run one type by
//! name or all six at once.
//!
//! All operations respect the system DNS configuration and never fail: a
//! lookup that errors or finds nothing yields an empty vector.

mod records;

use hickory_resolver::TokioAsyncResolver;

use crate::models::{DnsRecordType, DnsRecords};

// Re-export public API
pub use records::{lookup_a, lookup_cname, lookup_mx, lookup_ns, lookup_srv, lookup_txt};

/// Runs the lookup for a single record type.
pub async fn lookup_record(
    resolver: &TokioAsyncResolver,
    host: &str,
    kind: DnsRecordType,
) -> Vec<String> {
    match kind {
        DnsRecordType::Mx => lookup_mx(resolver, host).await,
        DnsRecordType::Txt => lookup_txt(resolver, host).await,
        DnsRecordType::A => lookup_a(resolver, host).await,
        DnsRecordType::Cname => lookup_cname(resolver, host).await,
        DnsRecordType::Ns => lookup_ns(resolver, host).await,
        DnsRecordType::Srv => lookup_srv(resolver, host).await,
    }
}

/// Runs all six lookups concurrently.
pub async fn lookup_all(resolver: &TokioAsyncResolver, host: &str) -> DnsRecords {
    let (mx, txt, a, cname, ns, srv) = tokio::join!(
        lookup_mx(resolver, host),
        lookup_txt(resolver, host),
        lookup_a(resolver, host),
        lookup_cname(resolver, host),
        lookup_ns(resolver, host),
        lookup_srv(resolver, host),
    );

    DnsRecords {
        mx,
        txt,
        a,
        cname,
        ns,
        srv,
    }
}
