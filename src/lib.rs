//! page_audit library: single-page SEO and accessibility audits
//!
//! The core is [`audit`], a pure function from a page URL, its HTML and a
//! measured load time to a [`Report`]: title, meta description, headings,
//! internal/external links, image alt coverage, accessibility signals and
//! basic performance figures. Around it sit an HTTP [`Retriever`] and a
//! concurrent batch runner.
//!
//! # Example
//!
//! ```
//! let html = r#"<html lang="en">
//!     <head><title>Welcome</title></head>
//!     <body><h1>Hello</h1><img src="logo.png"></body>
//! </html>"#;
//!
//! let report = page_audit::audit("https://example.com/", html, 120.0).unwrap();
//! assert_eq!(report.headings.h1, vec!["Hello"]);
//! assert_eq!(report.images.missing_alt, 1);
//! ```
//!
//! Fetching and auditing live pages:
//!
//! ```no_run
//! use page_audit::{run_audits, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     urls: vec!["https://example.com".to_string()],
//!     max_concurrency: 4,
//!     ..Default::default()
//! };
//!
//! let batch = run_audits(&config).await?;
//! println!("{} succeeded, {} failed", batch.successful, batch.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The engine is synchronous. Retrieval and the batch runner require a Tokio
//! runtime.

#![warn(missing_docs)]

pub mod app;
mod audit;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod parse;
mod utils;

// Re-export public API
pub use audit::{
    audit, audit_bytes, audit_with, Accessibility, AuditOptions, ContrastStatus, Headings,
    Images, Links, Performance, Report,
};
pub use config::{Config, ConfigValidationError, HostMatch, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    AnalysisError, AuditError, ErrorType, InfoType, InitializationError, ProcessingStats,
    RetrievalError, WarningType,
};
pub use fetch::{BodyLimits, FetchedPage, HttpRetriever, Retriever};
pub use run::{audit_page, audit_urls, run_audits, AuditOutcome, BatchReport};

// Internal run module (retrieval + audit pipeline and the batch runner)
mod run {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{debug, info, warn};

    use crate::app::{
        collect_urls, print_error_statistics, print_simple_summary, record_report_warnings,
    };
    use crate::audit::{audit_with, AuditOptions, Report};
    use crate::config::Config;
    use crate::error_handling::{AuditError, InfoType, ProcessingStats, RetrievalError};
    use crate::fetch::{HttpRetriever, Retriever};
    use crate::initialization::init_semaphore;
    use crate::parse::parse_page_url;

    /// Result of auditing one submitted URL.
    #[derive(Debug)]
    pub struct AuditOutcome {
        /// URL as submitted
        pub url: String,
        /// The report, or why there is none
        pub result: Result<Report, AuditError>,
    }

    impl AuditOutcome {
        /// Returns `true` if a report was produced.
        pub fn is_success(&self) -> bool {
            self.result.is_ok()
        }
    }

    /// Results of a batch run.
    ///
    /// `outcomes` is in the same order as the submitted URLs, whatever order
    /// the audits completed in.
    #[derive(Debug)]
    pub struct BatchReport {
        /// One outcome per submitted URL
        pub outcomes: Vec<AuditOutcome>,
        /// Number of URLs audited
        pub total_urls: usize,
        /// Number of URLs that produced a report
        pub successful: usize,
        /// Number of URLs that failed
        pub failed: usize,
        /// Wall-clock duration of the batch in seconds
        pub elapsed_seconds: f64,
    }

    impl BatchReport {
        /// Process exit code for this batch: `0` if every audit succeeded, `1` otherwise.
        pub fn exit_code(&self) -> i32 {
            if self.failed > 0 {
                1
            } else {
                0
            }
        }
    }

    struct Audited {
        report: Report,
        redirect: Option<InfoType>,
    }

    async fn retrieve_and_audit<R: Retriever>(
        retriever: &R,
        url: &str,
        options: &AuditOptions,
    ) -> Result<Audited, AuditError> {
        let page_url = parse_page_url(url)?;
        match page_url.scheme() {
            "http" | "https" => {}
            other => return Err(RetrievalError::UnsupportedScheme(other.to_string()).into()),
        }

        let page = retriever.fetch(url).await?;

        let redirect = if page.final_url == page_url.as_str() {
            None
        } else if page_url.scheme() == "http" && page.final_url.starts_with("https://") {
            Some(InfoType::HttpsRedirect)
        } else {
            Some(InfoType::HttpRedirect)
        };
        if redirect.is_some() {
            debug!("{url} redirected to {}", page.final_url);
        }

        let report = audit_with(url, &page.html, page.elapsed_ms, options)?;
        Ok(Audited { report, redirect })
    }

    /// Retrieves and audits one page.
    ///
    /// The URL is validated before any network activity: a malformed URL is
    /// an analysis error, a non-http(s) scheme a retrieval error.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::Retrieval` if the page cannot be fetched and
    /// `AuditError::Analysis` if the URL is malformed.
    pub async fn audit_page<R: Retriever>(
        retriever: &R,
        url: &str,
        options: &AuditOptions,
    ) -> Result<Report, AuditError> {
        retrieve_and_audit(retriever, url, options)
            .await
            .map(|audited| audited.report)
    }

    /// Audits many pages concurrently.
    ///
    /// At most `max_concurrency` audits are in flight at once. A failing URL
    /// is recorded in its outcome and in `stats`; it never stops the batch.
    pub async fn audit_urls<R: Retriever>(
        retriever: &R,
        urls: Vec<String>,
        options: &AuditOptions,
        max_concurrency: usize,
        stats: &ProcessingStats,
    ) -> BatchReport {
        let start = Instant::now();
        let total_urls = urls.len();
        let semaphore = init_semaphore(max_concurrency.max(1));

        let mut tasks: FuturesUnordered<_> = urls
            .into_iter()
            .enumerate()
            .map(|(index, url)| {
                let semaphore = &semaphore;
                async move {
                    // Never closed; a missing permit would only lift the bound
                    let _permit = semaphore.acquire().await.ok();
                    let result = retrieve_and_audit(retriever, &url, options).await;
                    (index, url, result)
                }
            })
            .collect();

        let mut slots: Vec<Option<AuditOutcome>> = (0..total_urls).map(|_| None).collect();
        let mut successful = 0usize;
        let mut failed = 0usize;

        while let Some((index, url, result)) = tasks.next().await {
            let result = match result {
                Ok(Audited { report, redirect }) => {
                    successful += 1;
                    record_report_warnings(&report, stats);
                    if let Some(info_type) = redirect {
                        stats.increment_info(info_type);
                    }
                    debug!("Audited {url}");
                    Ok(report)
                }
                Err(e) => {
                    failed += 1;
                    stats.increment_error(e.error_type());
                    warn!("Failed to audit {url}: {e}");
                    Err(e)
                }
            };
            slots[index] = Some(AuditOutcome { url, result });
        }

        BatchReport {
            outcomes: slots.into_iter().flatten().collect(),
            total_urls,
            successful,
            failed,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        }
    }

    /// Runs a batch audit with the provided configuration.
    ///
    /// Collects URLs from the command line and `--file`, builds the HTTP
    /// retriever, audits everything and logs the batch statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL list cannot be read or the HTTP client
    /// cannot be initialized. Individual audit failures are reported in the
    /// returned `BatchReport`, not as errors.
    pub async fn run_audits(config: &Config) -> Result<BatchReport> {
        let urls = collect_urls(config)
            .await
            .context("Failed to collect URLs")?;
        if urls.is_empty() {
            warn!("No URLs to audit");
        }

        let retriever =
            HttpRetriever::from_config(config).context("Failed to initialize HTTP client")?;
        let options = AuditOptions {
            host_match: config.host_match,
        };
        let stats = ProcessingStats::new();

        info!(
            "Auditing {} URL{} (max concurrency {})",
            urls.len(),
            if urls.len() == 1 { "" } else { "s" },
            config.max_concurrency
        );
        let batch = audit_urls(&retriever, urls, &options, config.max_concurrency, &stats).await;

        print_error_statistics(&stats);
        print_simple_summary(
            batch.total_urls,
            batch.successful,
            batch.failed,
            batch.elapsed_seconds,
        );

        Ok(batch)
    }
}
