//! HTTP request execution.
//!
//! The façades never talk to the network themselves. They build a
//! [`PreparedRequest`](crate::models::PreparedRequest) and hand it to a
//! [`Transport`]; [`ReqwestTransport`] is the production implementation.

pub mod config;
pub mod error;
pub mod transport;

#[cfg(test)]
pub(crate) mod spy;

pub use config::ExecutionConfig;
pub use error::{RequestError, Result, STATUS_INTERNAL_SERVER_ERROR};
pub use transport::{ReqwestTransport, Transport};

/// Validates that the URL is well-formed and uses a supported protocol.
///
/// # Returns
///
/// The parsed URL, or `RequestError::InvalidUrl` /
/// `RequestError::UnsupportedProtocol`.
pub fn validate_url(url: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(RequestError::UnsupportedProtocol(format!(
            "Only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(parsed)
}
