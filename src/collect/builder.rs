//! Report assembly.
//!
//! A `ReportBuilder` lives for one collection. Probe results are folded in as
//! they come back; `finish` hands out the finished `Report` by value.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error_handling::ProbeError;
use crate::fetch::FetchOutcome;
use crate::models::{DnsRecordType, DnsRecords, Report, TlsCertificate};
use crate::target::Target;
use crate::utils::duration_to_ms;

pub(crate) struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub(crate) fn new(target: Target, request_timestamp: DateTime<Utc>) -> Self {
        Self {
            report: Report {
                request_timestamp,
                url: target,
                http_status_code: None,
                http_response_time: None,
                redirect_count: 0,
                redirect_urls: Vec::new(),
                tls_certificate: None,
                ping_time: None,
                dns: None,
                errors: Vec::new(),
            },
        }
    }

    /// A failed ping leaves `ping_time` absent and adds one error entry.
    pub(crate) fn ping(mut self, result: Result<Duration, ProbeError>) -> Self {
        match result {
            Ok(elapsed) => self.report.ping_time = Some(duration_to_ms(elapsed)),
            Err(e) => self.report.errors.push(format!("ping: {e}")),
        }
        self
    }

    /// A failed fetch leaves status and timing absent and adds one error entry.
    pub(crate) fn fetch(mut self, result: Result<FetchOutcome, ProbeError>) -> Self {
        match result {
            Ok(outcome) => {
                self.report.http_status_code = Some(outcome.status);
                self.report.http_response_time = Some(duration_to_ms(outcome.response_time));
                self.report.redirect_count = outcome.redirect_count();
                self.report.redirect_urls = outcome.redirect_urls;
            }
            Err(e) => self.report.errors.push(format!("fetch: {e}")),
        }
        self
    }

    pub(crate) fn certificate(mut self, certificate: TlsCertificate) -> Self {
        self.report.tls_certificate = Some(certificate);
        self
    }

    pub(crate) fn dns(mut self, records: DnsRecords) -> Self {
        self.report.dns = Some(records);
        self
    }

    /// Reports a single record type; the other five lists stay empty.
    pub(crate) fn dns_record(mut self, kind: DnsRecordType, records: Vec<String>) -> Self {
        let mut dns = DnsRecords::default();
        *dns.records_mut(kind) = records;
        self.report.dns = Some(dns);
        self
    }

    pub(crate) fn finish(self) -> Report {
        self.report
    }
}
