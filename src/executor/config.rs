//! HTTP request execution configuration.
//!
//! The subset of [`HttpHandlerConfig`] a transport needs, in the units the
//! transport wants.

use crate::config::{get_config, HttpHandlerConfig};
use std::time::Duration;

/// Parameters used to build a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Whole-exchange timeout.
    pub timeout: Duration,

    /// Connect timeout.
    pub connect_timeout: Duration,

    /// `None` disables redirects, `Some(n)` follows at most `n`.
    pub max_redirects: Option<u32>,

    /// Whether TLS certificates are validated.
    pub validate_ssl: bool,

    /// Default User-Agent header.
    pub user_agent: String,
}

impl ExecutionConfig {
    /// Creates an ExecutionConfig with the given timeout and defaults for
    /// everything else.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::from(&HttpHandlerConfig::default())
        }
    }

    /// Creates an ExecutionConfig from the global configuration.
    pub fn from_global_config() -> Self {
        Self::from(&get_config())
    }
}

impl From<&HttpHandlerConfig> for ExecutionConfig {
    fn from(config: &HttpHandlerConfig) -> Self {
        Self {
            timeout: config.timeout_duration(),
            connect_timeout: config.connect_timeout_duration(),
            max_redirects: config.follow_redirects.then_some(config.max_redirects),
            validate_ssl: config.validate_ssl,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Default for ExecutionConfig {
    /// Reads the global configuration.
    fn default() -> Self {
        Self::from_global_config()
    }
}
