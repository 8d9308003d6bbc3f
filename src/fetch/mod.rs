//! Page retrieval.
//!
//! The audit engine only consumes HTML text and a measured duration; this
//! module is where those come from. `Retriever` is the seam, `HttpRetriever`
//! the `reqwest` implementation with retry and response validation.

mod request;
mod response;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};
use tokio_retry::RetryIf;

pub use response::BodyLimits;

use crate::config::Config;
use crate::error_handling::{get_retry_strategy, is_retryable, InitializationError, RetrievalError};
use crate::initialization::init_client;
use crate::utils::duration_to_ms;
use request::RequestHeaders;
use response::read_html_body;

/// A retrieved page.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    /// URL after following redirects
    pub final_url: String,
    /// HTTP status of the final response
    pub status: u16,
    /// Response body as text
    pub html: String,
    /// Wall-clock time of the successful attempt, in milliseconds
    pub elapsed_ms: f64,
}

/// Something that can fetch a page's HTML.
///
/// Timeouts and retries are the implementation's business; callers only see
/// the final outcome.
pub trait Retriever {
    /// Retrieves `url`, returning its HTML and how long that took.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, RetrievalError>> + Send;
}

/// `reqwest`-backed retriever.
pub struct HttpRetriever {
    client: Arc<reqwest::Client>,
    limits: BodyLimits,
    max_attempts: usize,
}

impl HttpRetriever {
    /// Wraps an existing client.
    ///
    /// `max_attempts` counts the first attempt; `1` disables retries.
    pub fn new(client: Arc<reqwest::Client>, limits: BodyLimits, max_attempts: usize) -> Self {
        Self {
            client,
            limits,
            max_attempts,
        }
    }

    /// Builds the client and limits from the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let limits = BodyLimits {
            min_bytes: config.min_body_bytes,
            ..BodyLimits::default()
        };
        Ok(Self::new(client, limits, config.max_attempts))
    }

    async fn fetch_once(&self, url: &str) -> Result<FetchedPage, RetrievalError> {
        let start = Instant::now();

        let request = RequestHeaders::apply_to_request_builder(self.client.get(url));
        let response = request.send().await?.error_for_status()?;

        let final_url = response.url().to_string();
        let status = response.status().as_u16();
        if final_url != url {
            debug!("Final url after redirects: {final_url}");
        }

        let html = read_html_body(response, &self.limits).await?;

        Ok(FetchedPage {
            final_url,
            status,
            html,
            elapsed_ms: duration_to_ms(start.elapsed()),
        })
    }
}

impl Retriever for HttpRetriever {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, RetrievalError> {
        let mut attempt = 0usize;
        RetryIf::start(
            get_retry_strategy(self.max_attempts),
            || {
                attempt += 1;
                debug!("Fetching {url} (attempt {attempt}/{})", self.max_attempts);
                self.fetch_once(url)
            },
            |e: &RetrievalError| {
                let retry = is_retryable(e);
                if retry {
                    warn!("Transient failure fetching {url}: {e}");
                }
                retry
            },
        )
        .await
    }
}
