//! Shared helpers.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Millisecond conversion for measured durations

mod selector;

use std::time::Duration;

pub use selector::parse_selector_unsafe;

/// Converts a measured duration into fractional milliseconds.
pub fn duration_to_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
