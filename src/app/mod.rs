//! Application-level helpers for the batch runner and the CLI.
//!
//! URL list loading, report rendering, JSON-lines output and statistics
//! logging live here; the engine itself knows nothing about any of them.

pub mod output;
pub mod render;
pub mod statistics;
pub mod url;

// Re-export public API
pub use output::{
    json_line, write_json_lines, write_json_lines_to, AuditFailure, FailureDetail, IgnoreBrokenPipe,
};
pub use render::{format_bytes, render_failure, render_text};
pub use statistics::{print_error_statistics, print_simple_summary, record_report_warnings};
pub use url::{collect_urls, parse_url_lines, validate_url_line};
