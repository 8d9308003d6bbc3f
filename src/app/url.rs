//! URL list loading.

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::config::{Config, MAX_URL_LENGTH};

/// Cleans up one line of URL input.
///
/// Returns `None` for blank lines, `#` comments and URLs longer than
/// `MAX_URL_LENGTH`. Anything else is passed through untouched; a malformed
/// URL is reported by the audit, not dropped here.
pub fn validate_url_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    if trimmed.len() > MAX_URL_LENGTH {
        let preview: String = trimmed.chars().take(50).collect();
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            trimmed.len(),
            MAX_URL_LENGTH,
            preview
        );
        return None;
    }

    Some(trimmed.to_string())
}

/// Extracts URLs from newline-separated text.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines().filter_map(validate_url_line).collect()
}

async fn read_lines<R: AsyncRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut lines = BufReader::new(reader).lines();
    let mut urls = Vec::new();
    while let Some(line) = lines.next_line().await.context("Failed to read URL list")? {
        if let Some(url) = validate_url_line(&line) {
            urls.push(url);
        }
    }
    Ok(urls)
}

async fn read_url_file(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        info!("Reading URLs from stdin");
        return read_lines(tokio::io::stdin()).await;
    }

    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    read_lines(file).await
}

/// Gathers the URLs to audit: positional arguments first, then `--file`.
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or read.
pub async fn collect_urls(config: &Config) -> Result<Vec<String>> {
    let mut urls: Vec<String> = config
        .urls
        .iter()
        .filter_map(|u| validate_url_line(u))
        .collect();

    if let Some(path) = config.file.as_deref() {
        let from_file = read_url_file(path).await?;
        info!("Read {} URLs from {}", from_file.len(), path.display());
        urls.extend(from_file);
    }

    Ok(urls)
}
