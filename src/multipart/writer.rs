//! multipart/form-data body encoder.
//!
//! Every part is written as
//!
//! ```text
//! --{boundary}\n
//! {part headers}\n
//! \n
//! {content}\n
//! ```
//!
//! and [`MultipartWriter::finish`] closes the body with `--{boundary}--\n`.

use crate::executor::error::{RequestError, Result};
use crate::multipart::content_type::guess_content_type;
use std::io::{ErrorKind, Read, Write};

/// Boundary used unless another is given.
pub const DEFAULT_BOUNDARY: &str = "xxxYYYxxx";

const LINE_FEED: &str = "\n";
const COPY_CHUNK_SIZE: usize = 4096;

/// Writes multipart/form-data parts into any [`Write`].
pub struct MultipartWriter<W: Write> {
    inner: W,
    boundary: String,
    part_count: usize,
    finished: bool,
    broken: bool,
}

impl<W: Write> MultipartWriter<W> {
    /// Creates a writer using [`DEFAULT_BOUNDARY`].
    pub fn new(inner: W) -> Self {
        Self::with_boundary(inner, DEFAULT_BOUNDARY)
    }

    pub fn with_boundary(inner: W, boundary: impl Into<String>) -> Self {
        Self {
            inner,
            boundary: boundary.into(),
            part_count: 0,
            finished: false,
            broken: false,
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn part_count(&self) -> usize {
        self.part_count
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Writes a text field.
    pub fn add_form_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.ensure_open()?;
        let written = self.write_form_field(name, value);
        self.track(written)
    }

    /// Writes a file part, copying `reader` until EOF.
    ///
    /// The part's Content-Type is guessed from `file_name`. If `reader`
    /// fails, the part is left half written and the writer refuses any
    /// further parts as well as [`MultipartWriter::finish`].
    pub fn add_file_part<R: Read + ?Sized>(
        &mut self,
        field_name: &str,
        file_name: &str,
        reader: &mut R,
    ) -> Result<()> {
        self.ensure_open()?;
        let written = self.write_file_part(field_name, file_name, reader);
        self.track(written)
    }

    /// Writes the closing boundary and flushes. Calling it again does nothing.
    pub fn finish(&mut self) -> Result<()> {
        if self.broken {
            return Err(RequestError::MultipartIncomplete);
        }
        if self.finished {
            return Ok(());
        }
        let written = self.write_closing_boundary();
        self.track(written)?;
        self.finished = true;
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn ensure_open(&self) -> Result<()> {
        if self.broken {
            return Err(RequestError::MultipartIncomplete);
        }
        if self.finished {
            return Err(RequestError::MultipartFinished);
        }
        Ok(())
    }

    fn track(&mut self, written: Result<()>) -> Result<()> {
        if written.is_err() {
            self.broken = true;
        }
        written
    }

    fn write_form_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.start_part()?;
        write!(
            self.inner,
            "Content-Disposition: form-data; name=\"{}\"{}",
            escape_quoted(name),
            LINE_FEED
        )?;
        write!(
            self.inner,
            "Content-Type: text/plain; charset=UTF-8{}",
            LINE_FEED
        )?;
        self.inner.write_all(LINE_FEED.as_bytes())?;
        self.inner.write_all(value.as_bytes())?;
        self.end_part()
    }

    fn write_file_part<R: Read + ?Sized>(
        &mut self,
        field_name: &str,
        file_name: &str,
        reader: &mut R,
    ) -> Result<()> {
        self.start_part()?;
        write!(
            self.inner,
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"{}",
            escape_quoted(field_name),
            escape_quoted(file_name),
            LINE_FEED
        )?;
        write!(
            self.inner,
            "Content-Type: {}{}",
            guess_content_type(file_name),
            LINE_FEED
        )?;
        write!(self.inner, "Content-Transfer-Encoding: binary{}", LINE_FEED)?;
        self.inner.write_all(LINE_FEED.as_bytes())?;
        self.copy_from(reader)?;
        self.end_part()
    }

    fn write_closing_boundary(&mut self) -> Result<()> {
        write!(self.inner, "--{}--{}", self.boundary, LINE_FEED)?;
        self.inner.flush()?;
        Ok(())
    }

    fn start_part(&mut self) -> Result<()> {
        write!(self.inner, "--{}{}", self.boundary, LINE_FEED)?;
        Ok(())
    }

    fn end_part(&mut self) -> Result<()> {
        self.inner.write_all(LINE_FEED.as_bytes())?;
        self.inner.flush()?;
        self.part_count += 1;
        Ok(())
    }

    fn copy_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<()> {
        let mut buffer = [0u8; COPY_CHUNK_SIZE];
        loop {
            let bytes_read = match reader.read(&mut buffer) {
                Ok(0) => return Ok(()),
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.inner.write_all(&buffer[..bytes_read])?;
        }
    }
}

/// Percent-encodes the characters that would end a quoted header parameter
/// or the header line itself.
fn escape_quoted(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
