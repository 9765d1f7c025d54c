//! Error

/// API client error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid client configuration
    #[error("{0}")]
    Configuration(String),
    /// Path segment the URL would not keep as is
    #[error("Invalid path segment {0:?}")]
    InvalidSegment(String),
    /// Connection level failure
    #[error("Thunderpush could not connect to server: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered, but not the way it should
    #[error("{0}")]
    Server(String),
    /// The response body is not the expected JSON
    #[error("unexpected response from server")]
    ResponseParse,
}
