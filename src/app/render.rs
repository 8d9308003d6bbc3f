//! Human-readable report rendering.

use std::fmt::Write;

use crate::audit::Report;
use crate::error_handling::AuditError;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count in base-1024 units with at most two decimals.
///
/// Trailing zeros are dropped: `1536` is `"1.5 KB"`, `2048` is `"2 KB"`.
/// Sizes beyond the gigabyte range stay in GB.
pub fn format_bytes(bytes: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let bytes = bytes as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let exponent = ((bytes.ln() / 1024f64.ln()).floor() as usize).min(SIZE_UNITS.len() - 1);

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let scaled = bytes / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[exponent])
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Renders a report as a grouped plain-text block.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &Report) -> std::fmt::Result {
    let a = &report.accessibility;

    writeln!(out, "Basic Information")?;
    writeln!(out, "  URL: {}", report.url)?;
    writeln!(out, "  Title: {}", report.title)?;
    writeln!(out, "  Meta Description: {}", report.meta_description)?;

    writeln!(out, "Accessibility Analysis")?;
    writeln!(out, "  Language Attribute: {}", yes_no(a.has_lang))?;
    writeln!(out, "  Skip Link: {}", yes_no(a.has_skip_link))?;
    writeln!(out, "  ARIA Labels: {} found", a.has_aria_labels)?;
    writeln!(out, "  ARIA Roles: {} found", a.has_aria_roles)?;
    writeln!(out, "  Form Labels: {} found", a.has_form_labels)?;
    writeln!(out, "  Table Headers: {} found", a.has_table_headers)?;
    writeln!(out, "  Landmark Roles: {} found", a.has_landmarks)?;
    writeln!(out, "  Color Contrast: {}", a.color_contrast.as_str())?;
    writeln!(out, "  Keyboard Navigation: {}", yes_no(a.has_keyboard_navigation))?;

    writeln!(out, "Headings Structure")?;
    writeln!(out, "  H1 Tags: {} found", report.headings.h1.len())?;
    writeln!(out, "  H2 Tags: {} found", report.headings.h2.len())?;
    writeln!(out, "  H3 Tags: {} found", report.headings.h3.len())?;

    writeln!(out, "Links Analysis")?;
    writeln!(out, "  Internal Links: {} found", report.links.internal.len())?;
    writeln!(out, "  External Links: {} found", report.links.external.len())?;

    writeln!(out, "Images Analysis")?;
    writeln!(out, "  Total Images: {}", report.images.total)?;
    writeln!(out, "  Images Missing Alt Text: {}", report.images.missing_alt)?;

    writeln!(out, "Performance Metrics")?;
    writeln!(out, "  Load Time: {:.2}ms", report.performance.load_time)?;
    writeln!(out, "  Page Size: {}", format_bytes(report.performance.page_size))?;
    Ok(())
}

/// Renders a failed audit as a single line.
pub fn render_failure(url: &str, error: &AuditError) -> String {
    format!("{url}: {} error: {error}", error.kind())
}
