//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
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
}

/// Failure to obtain a page's HTML.
///
/// Raised by the retriever; the audit engine is never invoked when one of
/// these occurs.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Transport-level or HTTP status failure reported by `reqwest`.
    #[error("{kind}: {source}")]
    Http {
        /// Category used for statistics and retry decisions
        kind: ErrorType,
        /// Underlying client error
        source: ReqwestError,
    },

    /// The URL parsed, but its scheme cannot be fetched over HTTP.
    #[error("Unsupported URL scheme '{0}': only http and https pages can be retrieved")]
    UnsupportedScheme(String),

    /// The server answered with something other than HTML.
    #[error("Non-HTML content-type: {0}")]
    NonHtmlContent(String),

    /// Empty or suspiciously short body.
    #[error("Response body too short ({length} bytes, expected at least {minimum})")]
    BodyTooShort {
        /// Body length in bytes
        length: usize,
        /// Configured minimum
        minimum: usize,
    },

    /// Body exceeds `MAX_RESPONSE_BODY_SIZE`.
    #[error("Response body too large ({length} bytes, limit is {maximum})")]
    BodyTooLarge {
        /// Body length in bytes
        length: usize,
        /// Configured maximum
        maximum: usize,
    },
}

impl From<ReqwestError> for RetrievalError {
    fn from(source: ReqwestError) -> Self {
        RetrievalError::Http {
            kind: super::categorization::categorize_reqwest_error(&source),
            source,
        }
    }
}

impl RetrievalError {
    /// Returns the statistics category for this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            RetrievalError::Http { kind, .. } => *kind,
            RetrievalError::UnsupportedScheme(_) => ErrorType::UnsupportedScheme,
            RetrievalError::NonHtmlContent(_) => ErrorType::NonHtmlContent,
            RetrievalError::BodyTooShort { .. } => ErrorType::ResponseTooShort,
            RetrievalError::BodyTooLarge { .. } => ErrorType::ResponseTooLarge,
        }
    }
}

/// Failure internal to the audit engine.
///
/// Malformed HTML never produces one of these; it degrades to empty values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The audited URL is not a well-formed absolute URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The URL as submitted
        url: String,
        /// Parser diagnostic
        source: url::ParseError,
    },

    /// The document bytes are not text.
    #[error("Document is not valid UTF-8 text: {0}")]
    NotText(#[from] std::str::Utf8Error),
}

impl AnalysisError {
    /// Returns the statistics category for this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            AnalysisError::InvalidUrl { .. } => ErrorType::InvalidUrl,
            AnalysisError::NotText(_) => ErrorType::NonTextDocument,
        }
    }
}

/// Any failure of a single page audit.
///
/// Retrieval and analysis failures stay distinct so callers can present
/// different messages.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The page could not be fetched.
    #[error("Failed to retrieve page: {0}")]
    Retrieval(#[from] RetrievalError),

    /// The page was fetched (or never needed fetching) but could not be analyzed.
    #[error("Failed to analyze page: {0}")]
    Analysis(#[from] AnalysisError),
}

impl AuditError {
    /// Short machine-readable label: `"retrieval"` or `"analysis"`.
    pub fn kind(&self) -> &'static str {
        match self {
            AuditError::Retrieval(_) => "retrieval",
            AuditError::Analysis(_) => "analysis",
        }
    }

    /// Returns the statistics category for this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            AuditError::Retrieval(e) => e.error_type(),
            AuditError::Analysis(e) => e.error_type(),
        }
    }
}

/// Types of errors that can occur while auditing a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    // Specific HTTP status code errors
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    // Response validation
    UnsupportedScheme,
    NonHtmlContent,
    ResponseTooShort,
    ResponseTooLarge,
    // Analysis errors
    InvalidUrl,
    NonTextDocument,
}

/// SEO and accessibility findings worth counting across a batch.
///
/// Warnings never fail an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names, missing_docs)]
pub enum WarningType {
    MissingTitle,
    MissingMetaDescription,
    MissingLang,
    MissingH1,
    MissingImageAlt, // At least one <img> without an alt attribute
}

/// Types of informational metrics that can occur while auditing a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)]
pub enum InfoType {
    HttpRedirect,  // Final URL differs from the submitted one
    HttpsRedirect, // http:// submitted, https:// served
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::UnsupportedScheme => "Unsupported URL scheme",
            ErrorType::NonHtmlContent => "Non-HTML content",
            ErrorType::ResponseTooShort => "Response body too short",
            ErrorType::ResponseTooLarge => "Response body too large",
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::NonTextDocument => "Document is not text",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingMetaDescription => "Missing meta description",
            WarningType::MissingLang => "Missing lang attribute",
            WarningType::MissingH1 => "Missing h1 heading",
            WarningType::MissingImageAlt => "Images missing alt text",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HttpRedirect => "HTTP redirect",
            InfoType::HttpsRedirect => "HTTP to HTTPS redirect",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for error_type in ErrorType::iter() {
            assert!(
                seen.insert(error_type.as_str()),
                "duplicate label for {:?}",
                error_type
            );
        }
    }

    #[test]
    fn test_error_type_display_matches_as_str() {
        assert_eq!(
            ErrorType::HttpRequestNotFound.to_string(),
            ErrorType::HttpRequestNotFound.as_str()
        );
    }

    #[test]
    fn test_audit_error_kind() {
        let retrieval = AuditError::from(RetrievalError::NonHtmlContent("image/png".into()));
        assert_eq!(retrieval.kind(), "retrieval");
        assert_eq!(retrieval.error_type(), ErrorType::NonHtmlContent);

        let analysis = AuditError::from(AnalysisError::InvalidUrl {
            url: "not a url".into(),
            source: url::ParseError::RelativeUrlWithoutBase,
        });
        assert_eq!(analysis.kind(), "analysis");
        assert_eq!(analysis.error_type(), ErrorType::InvalidUrl);
    }

    #[test]
    fn test_retrieval_error_messages() {
        let err = RetrievalError::BodyTooShort {
            length: 3,
            minimum: 16,
        };
        assert_eq!(
            err.to_string(),
            "Response body too short (3 bytes, expected at least 16)"
        );
        assert_eq!(err.error_type(), ErrorType::ResponseTooShort);

        let err = RetrievalError::UnsupportedScheme("ftp".into());
        assert!(err.to_string().contains("ftp"));
        assert_eq!(err.error_type(), ErrorType::UnsupportedScheme);
    }

    #[test]
    fn test_analysis_error_message_names_url() {
        let err = AnalysisError::InvalidUrl {
            url: "not a url".into(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(err.to_string().contains("'not a url'"));
    }

    #[test]
    fn test_warning_type_labels() {
        for warning in WarningType::iter() {
            assert!(!warning.as_str().is_empty());
        }
        assert_eq!(InfoType::HttpsRedirect.as_str(), "HTTP to HTTPS redirect");
    }
}
