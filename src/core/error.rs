use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ThreadsError {
    /// An error occurred during an HTTP request (network, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success HTTP status.
    #[error("unexpected response status {status} from {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that produced the status.
        url: String,
    },

    /// A URL could not be parsed or joined.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Upstream data was missing or not in the expected shape.
    #[error("unexpected upstream data: {0}")]
    Data(String),

    /// A filesystem operation failed (offline fixtures, cache files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
