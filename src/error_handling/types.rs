//! Error type definitions.
//!
//! Only `CollectError` ever reaches the caller of a collection. Probe failures
//! (`ProbeError`) are turned into messages on the report.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error reading or parsing a settings file.
    #[error("Settings error: {0}")]
    SettingsError(String),
}

/// The input string could not be turned into a target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetParseError {
    /// Nothing to parse.
    #[error("target is empty")]
    Empty,

    /// The URL parser rejected the input.
    #[error("invalid target '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    /// The input parsed but carries no host.
    #[error("target '{0}' has no host")]
    MissingHost(String),

    /// The host is a bare public suffix (`com`, `co.uk`, `localhost`).
    #[error("target host '{0}' has no registrable domain")]
    NoRegistrableDomain(String),
}

/// A single probe failed. Recorded on the report, never fatal.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// TCP dial failed or timed out.
    #[error("failed to connect to {address}: {reason}")]
    Connect { address: String, reason: String },

    /// Building or sending an HTTP request failed.
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// A redirect pointed somewhere that is not a URL.
    #[error("invalid redirect from {from} to '{location}'")]
    InvalidRedirect { from: String, location: String },
}

/// Failure of a whole collection.
#[derive(Error, Debug)]
pub enum CollectError {
    /// The target could not be parsed; no probe ran.
    #[error(transparent)]
    TargetParse(#[from] TargetParseError),
}
