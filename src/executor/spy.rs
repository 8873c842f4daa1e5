//! Test double for [`Transport`].

use crate::executor::error::{RequestError, Result};
use crate::executor::transport::Transport;
use crate::models::request::HttpMethod;
use crate::models::response::HttpResponse;
use crate::models::PreparedRequest;
use std::sync::Mutex;

/// What the spy saw for one `send`, with the body drained into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Records every request and answers with a scripted outcome.
pub struct SpyTransport {
    outcome: Result<HttpResponse>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

impl SpyTransport {
    pub fn responding(response: HttpResponse) -> Self {
        Self {
            outcome: Ok(response),
            recorded: Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(status_code: u16, body: &str) -> Self {
        Self::responding(HttpResponse::new(status_code, "").with_body(body))
    }

    pub fn failing(error: RequestError) -> Self {
        Self {
            outcome: Err(error),
            recorded: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for SpyTransport {
    fn send(&self, request: PreparedRequest) -> Result<HttpResponse> {
        let body = request.body.into_bytes()?;
        self.recorded.lock().unwrap().push(RecordedRequest {
            url: request.url,
            method: request.method,
            headers: request.headers,
            body,
        });
        self.outcome.clone()
    }
}
