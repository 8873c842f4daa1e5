//! HTTP Basic authentication (RFC 7617).
//!
//! Credentials are joined as `username:password`, encoded as UTF-8 and then
//! base64 with the standard alphabet and padding.

use base64::{engine::general_purpose::STANDARD, Engine as _};

const SCHEME_PREFIX: &str = "Basic ";

/// A username/password pair for the Basic scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Renders the `Authorization` header value.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_handler::auth::basic::BasicCredentials;
    ///
    /// let value = BasicCredentials::new("user", "pass123").header_value();
    /// assert_eq!(value, "Basic dXNlcjpwYXNzMTIz");
    /// ```
    pub fn header_value(&self) -> String {
        let joined = format!("{}:{}", self.username, self.password);
        format!("{}{}", SCHEME_PREFIX, STANDARD.encode(joined.as_bytes()))
    }

    /// Reads credentials back from an `Authorization` header value.
    ///
    /// Splits on the first colon, so passwords may contain colons but
    /// usernames may not. Returns `None` for other schemes, bad base64 or
    /// non-UTF-8 payloads.
    pub fn from_header_value(header: &str) -> Option<Self> {
        let encoded = header.trim().strip_prefix(SCHEME_PREFIX)?.trim();
        let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(Self::new(username, password))
    }
}

/// Shorthand for `BasicCredentials::new(username, password).header_value()`.
pub fn basic_authorization(username: &str, password: &str) -> String {
    BasicCredentials::new(username, password).header_value()
}
