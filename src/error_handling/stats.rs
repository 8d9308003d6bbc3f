//! Processing statistics tracking.
//!
//! Thread-safe counters for errors, warnings, and informational metrics
//! across a batch of audits.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// One atomic counter per variant of `K`, all pre-populated at zero.
struct Counters<K> {
    counts: HashMap<K, AtomicUsize>,
}

impl<K> Counters<K>
where
    K: IntoEnumIterator + Copy + Eq + Hash + std::fmt::Debug,
{
    fn new() -> Self {
        Self {
            counts: K::iter().map(|k| (k, AtomicUsize::new(0))).collect(),
        }
    }

    fn increment(&self, key: K) {
        match self.counts.get(&key) {
            Some(counter) => {
                counter.fetch_add(1, Ordering::Relaxed);
            }
            // Unreachable while every variant is inserted in new()
            None => log::error!("No statistics counter registered for {:?}", key),
        }
    }

    fn get(&self, key: K) -> usize {
        self.counts
            .get(&key)
            .map_or(0, |c| c.load(Ordering::SeqCst))
    }

    fn total(&self) -> usize {
        self.counts.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

/// Thread-safe processing statistics tracker.
///
/// # Categories
///
/// - **Errors**: Retrieval or analysis failures (no report produced)
/// - **Warnings**: SEO/accessibility findings on produced reports
/// - **Info**: Notable events that aren't errors or warnings
///
/// Share across tasks with `Arc`.
pub struct ProcessingStats {
    errors: Counters<ErrorType>,
    warnings: Counters<WarningType>,
    info: Counters<InfoType>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    /// Creates statistics with every counter at zero.
    pub fn new() -> Self {
        ProcessingStats {
            errors: Counters::new(),
            warnings: Counters::new(),
            info: Counters::new(),
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        self.errors.increment(error);
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        self.warnings.increment(warning);
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        self.info.increment(info_type);
    }

    /// Current count for one error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(error)
    }

    /// Current count for one warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(warning)
    }

    /// Current count for one info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(info_type)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        self.errors.total()
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        self.warnings.total()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        self.info.total()
    }
}
