//! The seam between the façades and the HTTP stack.
//!
//! A [`Transport`] performs exactly one exchange per call. Everything below it
//! (TCP, TLS, chunked transfer, pooling) belongs to `reqwest`.

use crate::executor::config::ExecutionConfig;
use crate::executor::error::{RequestError, Result};
use crate::models::request::{HttpMethod, PreparedRequest, RequestBody};
use crate::models::response::HttpResponse;
use log::debug;
use std::time::Instant;

/// Sends a prepared request and returns the complete response.
///
/// Implementations must be shareable between threads, since a factory hands
/// one transport to every façade it builds.
pub trait Transport: Send + Sync {
    fn send(&self, request: PreparedRequest) -> Result<HttpResponse>;
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Builds the underlying client from an execution configuration.
    pub fn new(config: &ExecutionConfig) -> Result<Self> {
        let redirect = match config.max_redirects {
            Some(limit) => reqwest::redirect::Policy::limited(limit as usize),
            None => reqwest::redirect::Policy::none(),
        };

        // Bodies and Content-Encoding pass through as the server sent them,
        // even if another crate in the build enables reqwest's decoders.
        let client = reqwest::blocking::Client::builder()
            .no_gzip()
            .no_brotli()
            .no_deflate()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(redirect)
            .danger_accept_invalid_certs(!config.validate_ssl)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RequestError::BuildError(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: PreparedRequest) -> Result<HttpResponse> {
        let start_time = Instant::now();

        let method = match request.method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::DELETE => reqwest::Method::DELETE,
            HttpMethod::PATCH => reqwest::Method::PATCH,
            HttpMethod::HEAD => reqwest::Method::HEAD,
            HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
            HttpMethod::TRACE => reqwest::Method::TRACE,
        };

        debug!(
            "sending {} {} ({} headers, body {:?})",
            method,
            request.url,
            request.headers.len(),
            request.body
        );

        let mut req_builder = self.client.request(method, &request.url);

        for (name, value) in &request.headers {
            req_builder = req_builder.header(name.as_str(), value.as_str());
        }

        req_builder = match request.body {
            RequestBody::Empty => req_builder,
            RequestBody::Bytes(bytes) => req_builder.body(bytes),
            // Unknown length, so reqwest sends it chunked.
            RequestBody::Stream(reader) => {
                req_builder.body(reqwest::blocking::Body::new(reader))
            }
        };

        let response = req_builder.send()?;

        let status = response.status();
        let mut received = HttpResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
        );
        for (name, value) in response.headers() {
            received.append_header(name.as_str(), &String::from_utf8_lossy(value.as_bytes()));
        }

        received.body = response.bytes()?.to_vec();
        received.duration = start_time.elapsed();

        debug!(
            "received {} {} ({} bytes in {:?})",
            received.status_code,
            received.status_text,
            received.body.len(),
            received.duration
        );

        Ok(received)
    }
}
