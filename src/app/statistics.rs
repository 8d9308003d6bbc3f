//! Batch statistics recording and logging.

use log::info;
use strum::IntoEnumIterator;

use crate::audit::Report;
use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};

/// Counts the SEO and accessibility warnings a report raises.
pub fn record_report_warnings(report: &Report, stats: &ProcessingStats) {
    if report.title.is_empty() {
        stats.increment_warning(WarningType::MissingTitle);
    }
    if report.meta_description.is_empty() {
        stats.increment_warning(WarningType::MissingMetaDescription);
    }
    if !report.accessibility.has_lang {
        stats.increment_warning(WarningType::MissingLang);
    }
    if report.headings.h1.is_empty() {
        stats.increment_warning(WarningType::MissingH1);
    }
    if report.images.missing_alt > 0 {
        stats.increment_warning(WarningType::MissingImageAlt);
    }
}

/// Prints a one-line summary of the run.
pub fn print_simple_summary(total: usize, successful: usize, failed: usize, elapsed_seconds: f64) {
    info!(
        "✅ Audited {} URL{} ({} succeeded, {} failed) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        successful,
        failed,
        elapsed_seconds
    );
}

/// Prints error, warning, and info statistics to the log.
///
/// Categories with no occurrences are omitted.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_warnings = error_stats.total_warnings();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_warnings > 0 {
        info!("Warning Counts ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            let count = error_stats.get_warning_count(warning_type);
            if count > 0 {
                info!("   {}: {}", warning_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit;

    #[test]
    fn test_record_report_warnings_bare_page() {
        let stats = ProcessingStats::new();
        let report = audit("https://example.com", "<img src=a.png>", 0.0).unwrap();
        record_report_warnings(&report, &stats);

        assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 1);
        assert_eq!(stats.get_warning_count(WarningType::MissingMetaDescription), 1);
        assert_eq!(stats.get_warning_count(WarningType::MissingLang), 1);
        assert_eq!(stats.get_warning_count(WarningType::MissingH1), 1);
        assert_eq!(stats.get_warning_count(WarningType::MissingImageAlt), 1);
        assert_eq!(stats.total_warnings(), 5);
    }

    #[test]
    fn test_record_report_warnings_clean_page() {
        let stats = ProcessingStats::new();
        let html = r#"<html lang="en"><head><title>T</title>
            <meta name="description" content="D"></head>
            <body><h1>H</h1><img src=a.png alt="a"></body></html>"#;
        let report = audit("https://example.com", html, 0.0).unwrap();
        record_report_warnings(&report, &stats);
        assert_eq!(stats.total_warnings(), 0);
    }

    #[test]
    fn test_print_error_statistics_all_types() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_warning(WarningType::MissingMetaDescription);
        stats.increment_info(InfoType::HttpRedirect);
        // Should handle all types together
        print_error_statistics(&stats);
        print_error_statistics(&ProcessingStats::new());
    }

    #[test]
    fn test_print_simple_summary() {
        print_simple_summary(1, 1, 0, 0.25);
        print_simple_summary(3, 2, 1, 12.0);
    }
}
