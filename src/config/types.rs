//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MIN_RESPONSE_BODY_SIZE,
    RETRY_MAX_ATTEMPTS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How audit reports are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grouped, human-readable summary
    Text,
    /// One JSON object per audited URL
    Json,
}

/// Policy for deciding whether a link points at the audited site.
///
/// Hostnames are compared as strings; this only controls whether a leading
/// `www.` label is significant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HostMatch {
    /// Hostnames must be identical (`www.example.com` != `example.com`)
    #[default]
    Exact,
    /// A leading `www.` is ignored on both sides before comparing
    IgnoreWww,
}

impl HostMatch {
    /// Returns `true` if `link_host` belongs to the same site as `page_host`.
    pub fn same_site(self, page_host: &str, link_host: &str) -> bool {
        match self {
            HostMatch::Exact => page_host == link_host,
            HostMatch::IgnoreWww => strip_www(page_host) == strip_www(link_host),
        }
    }
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Command-line options and library configuration.
///
/// Parsed by `clap` in the binary, or built programmatically with
/// `..Default::default()`.
///
/// # Examples
///
/// ```no_run
/// use page_audit::Config;
///
/// let config = Config {
///     urls: vec!["https://example.com".to_string()],
///     max_concurrency: 4,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "page_audit",
    about = "Audits web pages for SEO, accessibility, structure and performance signals."
)]
pub struct Config {
    /// URLs to audit
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// File to read URLs from, one per line (`-` for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format written to stdout: text|json
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Also write every outcome as JSON lines to this file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Internal/external link policy: exact|ignore-www
    #[arg(long, value_enum, default_value_t = HostMatch::Exact)]
    pub host_match: HostMatch,

    /// Maximum number of pages audited concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Attempts per URL for transient failures (1 disables retries)
    #[arg(long, default_value_t = RETRY_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Responses with fewer body bytes than this are treated as failed retrievals
    #[arg(long, default_value_t = MIN_RESPONSE_BODY_SIZE)]
    pub min_body_bytes: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            file: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Text,
            output: None,
            host_match: HostMatch::Exact,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_attempts: RETRY_MAX_ATTEMPTS,
            min_body_bytes: MIN_RESPONSE_BODY_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// A configuration value that is out of range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Config {
    /// Checks option ranges before any resource is initialized.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigValidationError` found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.urls.is_empty() && self.file.is_none() {
            return Err(ConfigValidationError::new(
                "urls",
                "provide at least one URL or --file <path>",
            ));
        }
        if self.max_concurrency == 0 || self.max_concurrency > 1000 {
            return Err(ConfigValidationError::new(
                "max_concurrency",
                "must be greater than 0 and at most 1000",
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0",
            ));
        }
        if self.max_attempts == 0 || self.max_attempts > 10 {
            return Err(ConfigValidationError::new(
                "max_attempts",
                "must be between 1 and 10",
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "user_agent",
                "must not be empty",
            ));
        }
        Ok(())
    }
}
