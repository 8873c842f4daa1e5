//! Response side of one exchange.
//!
//! An [`HttpResponse`] holds what the transport returned: status, headers,
//! body bytes and how long the exchange took. The façades decide from the
//! status whether the body is read as response text or as error text.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Status, headers and body received for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status_code: u16,

    /// Canonical reason phrase, e.g. "Not Found".
    pub status_text: String,

    /// Header names as received. Use [`HttpResponse::header`] for lookups.
    pub headers: HashMap<String, String>,

    /// Raw body bytes; binary payloads are never decoded.
    pub body: Vec<u8>,

    /// Time from sending the request to the last body byte.
    pub duration: Duration,
}

impl HttpResponse {
    pub fn new(status_code: u16, status_text: impl Into<String>) -> Self {
        Self {
            status_code,
            status_text: status_text.into(),
            headers: HashMap::new(),
            body: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    /// Replaces the body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Status 400 and above. The body of such a response is error text.
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }

    /// Looks a header up, ignoring the case of `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Records a received header.
    ///
    /// A header seen more than once keeps a single entry, its values
    /// joined with `", "` in arrival order.
    pub fn append_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            None => {
                self.headers.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Decodes the body as UTF-8.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }
}
