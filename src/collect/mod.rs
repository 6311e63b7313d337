//! Report collection.
//!
//! A `Collector` resolves one input string to a target, runs the probes
//! against it and merges the results into a `Report`:
//! - target parsing failure: the collection fails, nothing is probed
//! - ping or fetch failure: a message on `Report::errors`, collection goes on
//! - TLS failure: zero-value certificate, no message
//! - DNS failure: empty record lists, no message
//!
//! `collect_all` runs the four probe families concurrently; the other
//! `collect_*` functions run a single family.

mod builder;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use hickory_resolver::TokioAsyncResolver;

use crate::config::Settings;
use crate::dns::{lookup_all, lookup_record};
use crate::error_handling::{CollectError, InitializationError, ProbeError};
use crate::fetch::{fetch, FetchOutcome};
use crate::initialization::{init_probe_client, init_resolver};
use crate::models::{DnsRecordType, DnsRecords, Report, TlsCertificate};
use crate::ping::ping;
use crate::target::{ParsedTarget, Target};
use crate::tls::inspect_certificate;

use builder::ReportBuilder;

/// Runs collections with one set of settings.
///
/// Cheap to clone; clones share the settings and the DNS resolver. Concurrent
/// collections on the same `Collector` share no mutable state.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use hostinfo::{Collector, Settings};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let collector = Collector::new(Arc::new(Settings::default()))?;
/// let report = collector.collect_all("https://example.com").await?;
/// println!("status {:?}, {} error(s)", report.http_status_code, report.errors.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Collector {
    settings: Arc<Settings>,
    resolver: Arc<TokioAsyncResolver>,
}

impl Collector {
    /// Creates a collector with a resolver built from the system DNS
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the settings cannot
    /// produce an HTTP client (an unusable User-Agent, for instance).
    pub fn new(settings: Arc<Settings>) -> Result<Self, InitializationError> {
        // Each collection builds its own client; fail here rather than on every fetch
        drop(init_probe_client(&settings)?);
        let resolver = Arc::new(init_resolver(&settings));
        Ok(Self { settings, resolver })
    }

    /// Runs every probe and returns the full report.
    ///
    /// # Errors
    ///
    /// Returns `CollectError::TargetParse` if `input` is not a usable target.
    /// Probe failures never fail the collection.
    pub async fn collect_all(&self, input: &str) -> Result<Report, CollectError> {
        let (target, started) = self.resolve_target(input)?;
        log::info!("Collecting everything for {}", target.hostname());

        let (ping_result, fetch_result, certificate, dns) = tokio::join!(
            self.run_ping(&target),
            self.run_fetch(&target),
            self.run_certificate(&target),
            self.run_dns(&target),
        );

        let report = ReportBuilder::new(target, started)
            .fetch(fetch_result)
            .ping(ping_result)
            .certificate(certificate)
            .dns(dns)
            .finish();
        log_finished(&report);
        Ok(report)
    }

    /// Runs only the TCP reachability probe.
    pub async fn collect_ping(&self, input: &str) -> Result<Report, CollectError> {
        let (target, started) = self.resolve_target(input)?;
        let result = self.run_ping(&target).await;
        let report = ReportBuilder::new(target, started).ping(result).finish();
        log_finished(&report);
        Ok(report)
    }

    /// Runs only the HTTP fetch probe (with redirect following).
    pub async fn collect_fetch(&self, input: &str) -> Result<Report, CollectError> {
        let (target, started) = self.resolve_target(input)?;
        let result = self.run_fetch(&target).await;
        let report = ReportBuilder::new(target, started).fetch(result).finish();
        log_finished(&report);
        Ok(report)
    }

    /// Runs only the TLS certificate inspection.
    pub async fn collect_certificate(&self, input: &str) -> Result<Report, CollectError> {
        let (target, started) = self.resolve_target(input)?;
        let certificate = self.run_certificate(&target).await;
        let report = ReportBuilder::new(target, started)
            .certificate(certificate)
            .finish();
        log_finished(&report);
        Ok(report)
    }

    /// Runs all six DNS lookups.
    pub async fn collect_dns(&self, input: &str) -> Result<Report, CollectError> {
        let (target, started) = self.resolve_target(input)?;
        let dns = self.run_dns(&target).await;
        let report = ReportBuilder::new(target, started).dns(dns).finish();
        log_finished(&report);
        Ok(report)
    }

    /// Runs the DNS lookup for one record type.
    pub async fn collect_dns_record(
        &self,
        input: &str,
        kind: DnsRecordType,
    ) -> Result<Report, CollectError> {
        let (target, started) = self.resolve_target(input)?;
        let records = lookup_record(&self.resolver, &target.hostname(), kind).await;
        let report = ReportBuilder::new(target, started)
            .dns_record(kind, records)
            .finish();
        log_finished(&report);
        Ok(report)
    }

    /// Parses `input` and applies the fallback port and protocol.
    fn resolve_target(&self, input: &str) -> Result<(Target, DateTime<Utc>), CollectError> {
        let target = ParsedTarget::parse(input)
            .inspect_err(|e| log::error!("Cannot collect '{input}': {e}"))?
            .resolve(&self.settings);
        Ok((target, Utc::now()))
    }

    /// Dials `domain.tld:port`; the subdomain is not part of the address.
    async fn run_ping(&self, target: &Target) -> Result<Duration, ProbeError> {
        ping(
            &target.base_hostname(),
            target.port,
            self.settings.ping_timeout(),
        )
        .await
    }

    async fn run_fetch(&self, target: &Target) -> Result<FetchOutcome, ProbeError> {
        let url = target.fetch_url();
        // Built per collection and dropped at the end of it, with its connections
        let client = init_probe_client(&self.settings).map_err(|source| ProbeError::Http {
            url: url.clone(),
            source,
        })?;
        fetch(&client, target, &url, self.settings.redirect_limit).await
    }

    /// Inspects `domain.tld` on port 443, whatever the target's port.
    async fn run_certificate(&self, target: &Target) -> TlsCertificate {
        inspect_certificate(&target.base_hostname(), self.settings.tls_timeout()).await
    }

    async fn run_dns(&self, target: &Target) -> DnsRecords {
        lookup_all(&self.resolver, &target.hostname()).await
    }
}

fn log_finished(report: &Report) {
    if report.errors.is_empty() {
        log::info!("Collected {}", report.url.hostname());
    } else {
        log::warn!(
            "Collected {} with {} error(s): {}",
            report.url.hostname(),
            report.errors.len(),
            report.errors.join("; ")
        );
    }
}
