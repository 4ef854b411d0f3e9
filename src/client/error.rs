//! Errors returned by the catalog HTTP client.

use thiserror::Error;

/// Error calling the catalog API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, timeout, or an undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// The base URL cannot carry path segments (e.g. `mailto:`)
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A course id or topic that no URL path can carry: empty, `.` or `..`
    #[error("Cannot address path segment {0:?}")]
    UnaddressableSegment(String),

    /// The server answered 404; carries the server's message
    #[error("{0}")]
    NotFound(String),

    /// Any other non-success status; carries the server's message
    #[error("Server error {status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether the request was aborted by the client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
