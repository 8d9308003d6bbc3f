//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize errors and configure retry strategies.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::{ErrorType, RetrievalError};

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - First delay: `RETRY_BACKOFF_BASE * RETRY_FACTOR_MS` milliseconds
/// - Each further delay multiplied by `RETRY_BACKOFF_BASE`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
///
/// # Arguments
///
/// * `max_attempts` - Total attempts including the first one; the iterator
///   yields `max_attempts - 1` delays
pub fn get_retry_strategy(max_attempts: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_BACKOFF_BASE)
        .factor(crate::config::RETRY_FACTOR_MS)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(max_attempts.saturating_sub(1))
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    // Check HTTP status codes first
    if let Some(status) = error.status() {
        match status.as_u16() {
            // Client errors (4xx)
            400 => return ErrorType::HttpRequestBadRequest,
            401 => return ErrorType::HttpRequestUnauthorized,
            403 => return ErrorType::HttpRequestBotDetectionError,
            404 => return ErrorType::HttpRequestNotFound,
            429 => return ErrorType::HttpRequestTooManyRequests,
            // Server errors (5xx)
            500 => return ErrorType::HttpRequestInternalServerError,
            502 => return ErrorType::HttpRequestBadGateway,
            503 => return ErrorType::HttpRequestServiceUnavailable,
            504 => return ErrorType::HttpRequestGatewayTimeout,
            _ if status.is_client_error() || status.is_server_error() => {
                return ErrorType::HttpRequestStatusError;
            }
            _ => {
                // Non-standard status codes - fall through to check error type
            }
        }
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Returns `true` if a retrieval failure is transient and worth another attempt.
///
/// Timeouts, connection failures, 429 and 5xx responses are retried. Client
/// errors and response validation failures are not: the same request would
/// produce the same answer.
pub fn is_retryable(error: &RetrievalError) -> bool {
    matches!(
        error.error_type(),
        ErrorType::HttpRequestTimeoutError
            | ErrorType::HttpRequestConnectError
            | ErrorType::HttpRequestTooManyRequests
            | ErrorType::HttpRequestInternalServerError
            | ErrorType::HttpRequestBadGateway
            | ErrorType::HttpRequestServiceUnavailable
            | ErrorType::HttpRequestGatewayTimeout
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_retry_strategy_initial_delay() {
        let first_delay = get_retry_strategy(3).next().unwrap();
        let expected_ms =
            (crate::config::RETRY_BACKOFF_BASE * crate::config::RETRY_FACTOR_MS) as u128;
        assert_eq!(first_delay.as_millis(), expected_ms);
    }

    #[test]
    fn test_get_retry_strategy_exponential_backoff() {
        let delays: Vec<Duration> = get_retry_strategy(5).collect();
        for i in 1..delays.len() {
            let prev = delays[i - 1].as_millis();
            let curr = delays[i].as_millis();
            assert!(curr >= prev, "Delay should increase: {} >= {}", curr, prev);
        }
    }

    #[test]
    fn test_get_retry_strategy_max_delay() {
        let max_delay_ms = crate::config::RETRY_MAX_DELAY_SECS * 1000;
        for delay in get_retry_strategy(10) {
            assert!(
                delay.as_millis() <= max_delay_ms as u128,
                "Delay {}ms exceeds max {}ms",
                delay.as_millis(),
                max_delay_ms
            );
        }
    }

    #[test]
    fn test_get_retry_strategy_attempt_count() {
        assert_eq!(get_retry_strategy(3).count(), 2);
        assert_eq!(get_retry_strategy(1).count(), 0);
        assert_eq!(get_retry_strategy(0).count(), 0);
    }

    #[test]
    fn test_validation_failures_are_not_retryable() {
        assert!(!is_retryable(&RetrievalError::NonHtmlContent(
            "application/json".into()
        )));
        assert!(!is_retryable(&RetrievalError::BodyTooShort {
            length: 0,
            minimum: 16
        }));
        assert!(!is_retryable(&RetrievalError::UnsupportedScheme(
            "ftp".into()
        )));
    }

    // Status-code categorization needs real reqwest::Error values; it is
    // covered against a mock server in src/fetch/tests.rs.
}
