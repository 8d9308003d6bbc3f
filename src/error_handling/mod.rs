//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (retrieval vs. analysis failures)
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Retry strategy configuration
//!
//! Error types are categorized into:
//! - **Errors**: Failures that prevent an audit from producing a report
//! - **Warnings**: SEO/accessibility findings on successfully audited pages
//! - **Info**: Informational metrics (redirects)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{get_retry_strategy, is_retryable};
pub use stats::ProcessingStats;
pub use types::{
    AnalysisError, AuditError, ErrorType, InfoType, InitializationError, RetrievalError,
    WarningType,
};
