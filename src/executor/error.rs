//! HTTP request execution error types.
//!
//! Every failure the façade, the multipart uploader or the factory can report
//! is a [`RequestError`]. Transport errors are folded into a handful of
//! variants; there is no retry or partial-failure handling on top of them.

use thiserror::Error;

/// Status code reported by `response_code` when the exchange failed.
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RequestError>;

/// Errors that can occur while preparing, sending or reading a request.
///
/// The enum is `Clone` because a handler records the outcome of its single
/// exchange and hands the same failure back on every later read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Network error occurred during request execution.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other network-level issues.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out before completion.
    #[error("Request timed out")]
    Timeout,

    /// Invalid URL provided to the factory.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Only HTTP and HTTPS are supported.
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),

    /// TLS/SSL error occurred during HTTPS connection.
    #[error("TLS/SSL error: {0}")]
    TlsError(String),

    /// The request could not be built from the given parts.
    #[error("Request build error: {0}")]
    BuildError(String),

    /// The request method is unknown or not allowed.
    #[error("Not an ok requestMethod: {0}")]
    InvalidMethod(String),

    /// A setter was called after the request had already been sent.
    #[error("Request already sent, cannot change {0}")]
    AlreadySent(String),

    /// The server answered with an error status; its body is only
    /// available through `error_text`.
    #[error("Server returned error status {0}")]
    ErrorStatus(u16),

    /// `error_text` was called but the response is not an error.
    #[error("No error body available, status was {0}")]
    NoErrorBody(u16),

    /// The response body is not valid UTF-8.
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidText(String),

    /// Multipart headers can only be set before the first part is added.
    #[error(
        "Headers can not be set after connection is setup on multipart requests, headerName: {name} headerValue: {value}"
    )]
    HeadersLocked { name: String, value: String },

    /// A part was added after the closing boundary was written.
    #[error("Multipart body already finished")]
    MultipartFinished,

    /// An earlier part failed halfway; the body can not be completed.
    #[error("Multipart body is incomplete after a failed part")]
    MultipartIncomplete,

    /// Reading a request body source or writing the multipart body failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl RequestError {
    /// Whether the error came from the transport rather than from misuse of
    /// the façade.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RequestError::NetworkError(_) | RequestError::Timeout | RequestError::TlsError(_)
        )
    }
}

/// Convert reqwest errors to RequestError.
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RequestError::Timeout
        } else if err.is_builder() {
            RequestError::BuildError(err.to_string())
        } else if err.to_string().contains("certificate")
            || err.to_string().contains("TLS")
            || err.to_string().contains("SSL")
        {
            RequestError::TlsError(err.to_string())
        } else {
            RequestError::NetworkError(err.to_string())
        }
    }
}

/// Convert URL parsing errors to RequestError.
impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for RequestError {
    fn from(err: std::io::Error) -> Self {
        RequestError::Io(err.to_string())
    }
}
