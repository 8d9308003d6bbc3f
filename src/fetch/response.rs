//! HTTP response validation and body extraction.

use log::debug;

use crate::error_handling::RetrievalError;

/// Size bounds a response body must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimits {
    /// Bodies with fewer non-whitespace-trimmed bytes are rejected
    pub min_bytes: usize,
    /// Bodies with more bytes are rejected
    pub max_bytes: usize,
}

impl Default for BodyLimits {
    fn default() -> Self {
        Self {
            min_bytes: crate::config::MIN_RESPONSE_BODY_SIZE,
            max_bytes: crate::config::MAX_RESPONSE_BODY_SIZE,
        }
    }
}

/// Returns `true` for content types that carry an HTML document.
pub(crate) fn is_html_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    mime == "text/html" || mime == "application/xhtml+xml"
}

/// Validates a successful response and reads its body as text.
///
/// A missing `Content-Type` header is tolerated (some servers don't send
/// it); any other non-HTML type is rejected. The body is read chunk by
/// chunk and abandoned as soon as it grows past `limits.max_bytes`, so an
/// undeclared (chunked) length is bounded too. Invalid UTF-8 is replaced
/// rather than rejected.
///
/// # Errors
///
/// - `RetrievalError::NonHtmlContent` for a non-HTML content type
/// - `RetrievalError::BodyTooLarge` if the declared or actual length exceeds the limit
/// - `RetrievalError::BodyTooShort` for an empty or near-empty body
/// - `RetrievalError::Http` if the body cannot be read
pub(crate) async fn read_html_body(
    mut response: reqwest::Response,
    limits: &BodyLimits,
) -> Result<String, RetrievalError> {
    let url = response.url().to_string();

    if let Some(ct) = response.headers().get(reqwest::header::CONTENT_TYPE) {
        let ct = ct.to_str().unwrap_or("").to_string();
        if !is_html_content_type(&ct) {
            return Err(RetrievalError::NonHtmlContent(ct));
        }
    } else {
        debug!("No Content-Type header for {url}, continuing anyway");
    }

    if let Some(declared) = response.content_length() {
        let declared = usize::try_from(declared).unwrap_or(usize::MAX);
        if declared > limits.max_bytes {
            return Err(RetrievalError::BodyTooLarge {
                length: declared,
                maximum: limits.max_bytes,
            });
        }
    }

    let mut buf: Vec<u8> = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let length = buf.len() + chunk.len();
        if length > limits.max_bytes {
            return Err(RetrievalError::BodyTooLarge {
                length,
                maximum: limits.max_bytes,
            });
        }
        buf.extend_from_slice(&chunk);
    }

    let body = match String::from_utf8(buf) {
        Ok(body) => body,
        Err(e) => {
            debug!("Body for {url} is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let trimmed = body.trim().len();
    if trimmed < limits.min_bytes {
        return Err(RetrievalError::BodyTooShort {
            length: trimmed,
            minimum: limits.min_bytes,
        });
    }

    debug!("Body length for {url}: {} bytes", body.len());
    if log::log_enabled!(log::Level::Trace) {
        let preview: String = body
            .chars()
            .take(crate::config::MAX_HTML_PREVIEW_CHARS)
            .collect();
        log::trace!("HTML preview for {url}: {preview}");
    }

    Ok(body)
}
