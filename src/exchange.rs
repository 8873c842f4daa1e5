//! One request/response exchange, sent lazily.
//!
//! Both façades own an [`Exchange`]. Until the first read it holds the
//! request being assembled; the first read sends it and from then on the
//! exchange holds the recorded outcome, success or failure.

use crate::executor::error::{RequestError, Result, STATUS_INTERNAL_SERVER_ERROR};
use crate::executor::transport::Transport;
use crate::models::request::PreparedRequest;
use crate::models::response::HttpResponse;
use log::warn;
use std::io::Cursor;
use std::sync::Arc;

enum State {
    Pending(PreparedRequest),
    Done(Result<HttpResponse>),
}

pub(crate) struct Exchange {
    transport: Arc<dyn Transport>,
    state: State,
}

impl Exchange {
    pub(crate) fn new(transport: Arc<dyn Transport>, url: &str) -> Self {
        Self {
            transport,
            state: State::Pending(PreparedRequest::new(url)),
        }
    }

    pub(crate) fn is_sent(&self) -> bool {
        matches!(self.state, State::Done(_))
    }

    /// The request under construction. `what` names the setting being
    /// changed, for the error returned once the request is gone.
    pub(crate) fn request_mut(&mut self, what: &str) -> Result<&mut PreparedRequest> {
        match &mut self.state {
            State::Pending(request) => Ok(request),
            State::Done(_) => Err(RequestError::AlreadySent(what.to_string())),
        }
    }

    fn ensure_sent(&mut self) {
        if let State::Pending(request) = &mut self.state {
            let request = std::mem::take(request);
            let url = request.url.clone();
            let outcome = self.transport.send(request);
            if let Err(e) = &outcome {
                warn!("request to {} failed: {}", url, e);
            }
            self.state = State::Done(outcome);
        }
    }

    /// Sends the request if needed and returns the response.
    pub(crate) fn response(&mut self) -> Result<&HttpResponse> {
        self.ensure_sent();
        match &self.state {
            State::Done(Ok(response)) => Ok(response),
            State::Done(Err(e)) => Err(e.clone()),
            State::Pending(_) => Err(RequestError::BuildError(
                "request was not sent".to_string(),
            )),
        }
    }

    /// Status code, or 500 when the exchange failed.
    pub(crate) fn response_code(&mut self) -> u16 {
        self.response()
            .map(|response| response.status_code)
            .unwrap_or(STATUS_INTERNAL_SERVER_ERROR)
    }

    /// Body of a non-error response.
    pub(crate) fn response_text(&mut self) -> Result<String> {
        let response = self.successful_response()?;
        body_text(response)
    }

    pub(crate) fn response_binary(&mut self) -> Result<Cursor<Vec<u8>>> {
        let response = self.successful_response()?;
        Ok(Cursor::new(response.body.clone()))
    }

    /// Body of an error response (status >= 400).
    pub(crate) fn error_text(&mut self) -> Result<String> {
        let response = self.response()?;
        if !response.is_error() {
            return Err(RequestError::NoErrorBody(response.status_code));
        }
        body_text(response)
    }

    pub(crate) fn header_field(&mut self, name: &str) -> Option<String> {
        self.response()
            .ok()
            .and_then(|response| response.header(name))
            .map(str::to_string)
    }

    fn successful_response(&mut self) -> Result<&HttpResponse> {
        let response = self.response()?;
        if response.is_error() {
            return Err(RequestError::ErrorStatus(response.status_code));
        }
        Ok(response)
    }
}

fn body_text(response: &HttpResponse) -> Result<String> {
    response
        .text()
        .map_err(|e| RequestError::InvalidText(e.to_string()))
}
