//! Façade for a multipart/form-data upload.
//!
//! Headers may be added until the first part is written. Parts are encoded
//! into memory as they arrive; the upload is POSTed on the first read of the
//! response.

use crate::exchange::Exchange;
use crate::executor::error::{RequestError, Result, STATUS_INTERNAL_SERVER_ERROR};
use crate::executor::transport::Transport;
use crate::models::request::{HttpMethod, RequestBody};
use crate::multipart::writer::MultipartWriter;
use log::{debug, warn};
use std::io::Read;
use std::sync::Arc;

/// User-Agent set on every multipart upload.
pub const MULTIPART_USER_AGENT: &str = "HttpMultipartUploader Agent";

/// One multipart/form-data upload and its response.
pub trait HttpMultiPartUploader: Send {
    /// Adds a request header. Only allowed before the first part.
    fn add_header_field(&mut self, name: &str, value: &str) -> Result<()>;

    /// Adds a text field.
    fn add_form_field(&mut self, name: &str, value: &str) -> Result<()>;

    /// Adds a file part, reading `stream` to its end.
    fn add_file_part(
        &mut self,
        field_name: &str,
        file_name: &str,
        stream: &mut dyn Read,
    ) -> Result<()>;

    /// Closes the body.
    fn done(&mut self) -> Result<()>;

    /// Status code of the response, or 500 if the upload failed.
    fn response_code(&mut self) -> u16;

    /// Body of a successful response as UTF-8 text.
    fn response_text(&mut self) -> Result<String>;

    /// Body of an error response (status 400 or above).
    fn error_text(&mut self) -> Result<String>;
}

/// [`HttpMultiPartUploader`] backed by a [`Transport`].
pub struct HttpMultiPartUploaderImpl {
    exchange: Exchange,
    writer: Option<MultipartWriter<Vec<u8>>>,
    headers_locked: bool,
}

impl HttpMultiPartUploaderImpl {
    pub fn new(transport: Arc<dyn Transport>, url: &str) -> Self {
        Self {
            exchange: Exchange::new(transport, url),
            writer: Some(MultipartWriter::new(Vec::new())),
            headers_locked: false,
        }
    }

    /// Switches the request to a multipart POST. Runs once, before the first
    /// part is written.
    fn lock_headers(&mut self) -> Result<()> {
        if self.headers_locked {
            return Ok(());
        }
        let content_type = self.writer()?.content_type();
        let request = self.exchange.request_mut("multipart setup")?;
        request.method = HttpMethod::POST;
        request.set_header("Content-Type", &content_type);
        request.set_header("User-Agent", MULTIPART_USER_AGENT);
        self.headers_locked = true;
        Ok(())
    }

    fn writer(&mut self) -> Result<&mut MultipartWriter<Vec<u8>>> {
        self.writer
            .as_mut()
            .ok_or_else(|| RequestError::AlreadySent("multipart body".to_string()))
    }

    /// Moves the encoded body into the request, closing it if `done` was
    /// never called. A body broken by a failed part is never attached, so
    /// the upload is not sent.
    fn attach_body(&mut self) -> Result<()> {
        if self.exchange.is_sent() || self.writer.is_none() {
            return Ok(());
        }
        self.lock_headers()?;
        let writer = self.writer()?;
        if !writer.is_finished() {
            debug!("multipart body read before done(), closing it");
            writer.finish()?;
        }
        if let Some(writer) = self.writer.take() {
            self.exchange.request_mut("multipart body")?.body =
                RequestBody::Bytes(writer.into_inner());
        }
        Ok(())
    }
}

impl HttpMultiPartUploader for HttpMultiPartUploaderImpl {
    fn add_header_field(&mut self, name: &str, value: &str) -> Result<()> {
        if self.headers_locked {
            return Err(RequestError::HeadersLocked {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        self.exchange
            .request_mut("request header")?
            .set_header(name, value);
        Ok(())
    }

    fn add_form_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.lock_headers()?;
        self.writer()?.add_form_field(name, value)
    }

    fn add_file_part(
        &mut self,
        field_name: &str,
        file_name: &str,
        stream: &mut dyn Read,
    ) -> Result<()> {
        self.lock_headers()?;
        self.writer()?.add_file_part(field_name, file_name, stream)
    }

    fn done(&mut self) -> Result<()> {
        self.lock_headers()?;
        self.writer()?.finish()
    }

    fn response_code(&mut self) -> u16 {
        if let Err(e) = self.attach_body() {
            warn!("could not prepare multipart upload: {}", e);
            return STATUS_INTERNAL_SERVER_ERROR;
        }
        self.exchange.response_code()
    }

    fn response_text(&mut self) -> Result<String> {
        self.attach_body()?;
        self.exchange.response_text()
    }

    fn error_text(&mut self) -> Result<String> {
        self.attach_body()?;
        self.exchange.error_text()
    }
}
