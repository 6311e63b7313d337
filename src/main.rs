//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `hostinfo` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Settings assembly (defaults, settings file, flags)
//! - Report output (stdout or file)
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use hostinfo::export::{report_to_json, write_report};
use hostinfo::initialization::{init_crypto_provider, init_logger_with};
use hostinfo::{Collector, DnsRecordType, LogFormat, LogLevel, Report, Settings};

/// Probes a host and prints a JSON diagnostic report.
#[derive(Debug, Parser)]
#[command(name = "hostinfo", version, about)]
struct Cli {
    /// Host to probe: a bare domain, an IP address, or a full URL
    target: String,

    /// Which probes to run
    #[arg(long, value_enum, default_value_t = Check::All)]
    check: Check,

    /// Write the report to this file instead of stdout (replaced if present)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// JSON settings file; missing keys keep their defaults
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Maximum number of redirects to follow
    #[arg(long)]
    redirect_limit: Option<usize>,

    /// User-Agent header for the HTTP probe
    #[arg(long)]
    user_agent: Option<String>,

    /// Log level: error, warn, info, debug, or trace
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format: plain or json
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

/// Probe selection for `--check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Check {
    All,
    Ping,
    Fetch,
    Certificate,
    Dns,
    Mx,
    Txt,
    A,
    Cname,
    Ns,
    Srv,
}

impl Check {
    fn record_type(self) -> Option<DnsRecordType> {
        match self {
            Check::Mx => Some(DnsRecordType::Mx),
            Check::Txt => Some(DnsRecordType::Txt),
            Check::A => Some(DnsRecordType::A),
            Check::Cname => Some(DnsRecordType::Cname),
            Check::Ns => Some(DnsRecordType::Ns),
            Check::Srv => Some(DnsRecordType::Srv),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    if let Err(e) = run(cli).await {
        eprintln!("hostinfo error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli)?;
    let collector =
        Collector::new(Arc::new(settings)).context("Failed to initialize collector")?;

    let report = collect(&collector, &cli).await?;

    match &cli.output {
        Some(path) => write_report(&report, path).await?,
        None => println!(
            "{}",
            report_to_json(&report).context("Failed to serialize report")?
        ),
    }
    Ok(())
}

/// Defaults, then the settings file, then individual flags.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if let Some(limit) = cli.redirect_limit {
        settings.redirect_limit = limit;
    }
    if let Some(user_agent) = &cli.user_agent {
        settings.default_user_agent = user_agent.clone();
    }
    Ok(settings)
}

async fn collect(collector: &Collector, cli: &Cli) -> Result<Report> {
    let target = cli.target.as_str();
    let report = match cli.check {
        Check::All => collector.collect_all(target).await,
        Check::Ping => collector.collect_ping(target).await,
        Check::Fetch => collector.collect_fetch(target).await,
        Check::Certificate => collector.collect_certificate(target).await,
        Check::Dns => collector.collect_dns(target).await,
        check => match check.record_type() {
            Some(kind) => collector.collect_dns_record(target, kind).await,
            None => collector.collect_all(target).await,
        },
    };
    report.with_context(|| format!("Failed to collect '{target}'"))
}
