//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits, and retry parameters.

/// Default maximum number of pages audited at the same time
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum URL length (2048 characters).
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Responses larger than this are rejected to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
/// Minimum response body size in bytes
/// Anything shorter cannot hold a meaningful HTML page and usually indicates
/// a blocked or truncated response
pub const MIN_RESPONSE_BODY_SIZE: usize = 16;
/// Maximum HTML preview length in characters for debugging (500 chars)
pub const MAX_HTML_PREVIEW_CHARS: usize = 500;

// Redirect handling
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

// Retry strategy
/// Base of the exponential backoff (delay grows by this factor per attempt)
pub const RETRY_BACKOFF_BASE: u64 = 2;
/// Multiplier applied to the backoff, in milliseconds
/// With a base of 2 the first retry waits 500ms, the second 1s, and so on
pub const RETRY_FACTOR_MS: u64 = 250;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Default number of attempts per URL (initial attempt + 2 retries)
pub const RETRY_MAX_ATTEMPTS: usize = 3;

/// ARIA roles counted as landmarks by the accessibility checks
pub const LANDMARK_ROLES: &[&str] = &["main", "navigation", "complementary", "contentinfo"];

/// Fragment a skip-navigation link must point at
pub const SKIP_LINK_TARGET: &str = "#main-content";
