//! Configuration schema for the HTTP handler.
//!
//! Defines every user-configurable transport setting together with its
//! default value and validation rule.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transport settings shared by every handler a factory builds.
///
/// Missing settings fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpHandlerConfig {
    /// Request timeout in milliseconds.
    ///
    /// Covers connecting, sending and reading the whole response.
    /// Must be greater than 0. Defaults to 30000.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connect timeout in milliseconds. Must be greater than 0.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Whether 3xx responses are followed automatically.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow when `follow_redirects` is on.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Whether to validate TLS certificates.
    ///
    /// **Warning:** turning this off accepts any certificate.
    #[serde(default = "default_validate_ssl")]
    pub validate_ssl: bool,

    /// User-Agent sent unless a request sets its own.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpHandlerConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            follow_redirects: default_follow_redirects(),
            max_redirects: default_max_redirects(),
            validate_ssl: default_validate_ssl(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpHandlerConfig {
    /// Validates the configuration and returns errors if any settings are invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }

        if self.connect_timeout == 0 {
            return Err("connectTimeout must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("userAgent must not be empty".to_string());
        }

        Ok(())
    }

    /// Returns the timeout as a `Duration`.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    /// Returns the connect timeout as a `Duration`.
    pub fn connect_timeout_duration(&self) -> Duration {
        Duration::from_millis(self.connect_timeout)
    }
}

// Default value functions for serde

fn default_timeout() -> u64 {
    30000
}

fn default_connect_timeout() -> u64 {
    10000
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirects() -> u32 {
    10
}

fn default_validate_ssl() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("http-handler/{}", env!("CARGO_PKG_VERSION"))
}
