//! Request/response façade for a single HTTP exchange.
//!
//! Configure the request with the setters, then read the outcome. The first
//! read sends the request; every later read reuses what came back.
//!
//! ```no_run
//! use http_handler::{HttpHandlerFactory, HttpHandlerFactoryImpl};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let factory = HttpHandlerFactoryImpl::new()?;
//! let mut handler = factory.factor("https://example.org/record/1")?;
//! handler.set_request_method("GET")?;
//! handler.set_request_property("Accept", "application/json")?;
//!
//! if handler.response_code() == 200 {
//!     println!("{}", handler.response_text()?);
//! } else {
//!     eprintln!("{}", handler.error_text()?);
//! }
//! # Ok(())
//! # }
//! ```

use crate::auth::{basic_authorization, AUTHORIZATION_HEADER};
use crate::exchange::Exchange;
use crate::executor::error::{RequestError, Result};
use crate::executor::transport::Transport;
use crate::models::request::{HttpMethod, RequestBody};
use std::io::{Cursor, Read};
use std::sync::Arc;

/// One HTTP request and its response.
pub trait HttpHandler: Send {
    /// Sets the request method. Unknown methods are rejected.
    fn set_request_method(&mut self, method: &str) -> Result<()>;

    /// Sets a request header, replacing an earlier value for the same name.
    fn set_request_property(&mut self, key: &str, value: &str) -> Result<()>;

    /// Sets `Authorization: Basic ...` from the given credentials.
    fn set_basic_authorization(&mut self, username: &str, password: &str) -> Result<()>;

    /// Uses `output` (UTF-8) as the request body.
    fn set_output(&mut self, output: &str) -> Result<()>;

    /// Streams the request body from `stream`, using chunked transfer encoding.
    fn set_stream_output(&mut self, stream: Box<dyn Read + Send>) -> Result<()>;

    /// Status code of the response, or 500 if the exchange failed.
    fn response_code(&mut self) -> u16;

    /// Body of a successful response as UTF-8 text.
    ///
    /// Fails if the exchange failed or the status is 400 or above.
    fn response_text(&mut self) -> Result<String>;

    /// Body of a successful response as raw bytes.
    fn response_binary(&mut self) -> Result<Cursor<Vec<u8>>>;

    /// Body of an error response (status 400 or above).
    fn error_text(&mut self) -> Result<String>;

    /// A response header, matched case-insensitively.
    fn header_field(&mut self, name: &str) -> Option<String>;
}

/// [`HttpHandler`] backed by a [`Transport`].
pub struct HttpHandlerImpl {
    exchange: Exchange,
}

impl HttpHandlerImpl {
    pub fn new(transport: Arc<dyn Transport>, url: &str) -> Self {
        Self {
            exchange: Exchange::new(transport, url),
        }
    }

    /// Whether the request has been sent.
    pub fn is_sent(&self) -> bool {
        self.exchange.is_sent()
    }
}

impl HttpHandler for HttpHandlerImpl {
    fn set_request_method(&mut self, method: &str) -> Result<()> {
        let parsed = HttpMethod::from_str(method)
            .ok_or_else(|| RequestError::InvalidMethod(method.to_string()))?;
        self.exchange.request_mut("request method")?.method = parsed;
        Ok(())
    }

    fn set_request_property(&mut self, key: &str, value: &str) -> Result<()> {
        self.exchange.request_mut("request property")?.set_header(key, value);
        Ok(())
    }

    fn set_basic_authorization(&mut self, username: &str, password: &str) -> Result<()> {
        self.set_request_property(AUTHORIZATION_HEADER, &basic_authorization(username, password))
    }

    fn set_output(&mut self, output: &str) -> Result<()> {
        self.exchange.request_mut("output")?.body = RequestBody::Bytes(output.as_bytes().to_vec());
        Ok(())
    }

    fn set_stream_output(&mut self, stream: Box<dyn Read + Send>) -> Result<()> {
        self.exchange.request_mut("output")?.body = RequestBody::Stream(stream);
        Ok(())
    }

    fn response_code(&mut self) -> u16 {
        self.exchange.response_code()
    }

    fn response_text(&mut self) -> Result<String> {
        self.exchange.response_text()
    }

    fn response_binary(&mut self) -> Result<Cursor<Vec<u8>>> {
        self.exchange.response_binary()
    }

    fn error_text(&mut self) -> Result<String> {
        self.exchange.error_text()
    }

    fn header_field(&mut self, name: &str) -> Option<String> {
        self.exchange.header_field(name)
    }
}
