//! HTTP request building.

/// Browser-like request headers.
///
/// Some sites serve a stripped page, or nothing, to clients that do not look
/// like a browser. Only headers that do not change the body encoding are
/// sent: the client is built without decompression support, so advertising
/// `Accept-Encoding` would yield compressed bytes instead of HTML.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    const ACCEPT: &'static str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
    const ACCEPT_LANGUAGE: &'static str = "en-US,en;q=0.9";

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE)
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}
