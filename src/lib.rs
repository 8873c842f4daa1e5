//! HTTP Handler
//!
//! A thin, synchronous façade over an HTTP client: configure one request,
//! read back its status, headers, body or error text. A companion uploader
//! builds multipart/form-data bodies.
//!
//! # Architecture
//!
//! - **handler**: [`HttpHandler`], the single-request façade
//! - **multipart**: [`MultipartWriter`] encoder and the [`HttpMultiPartUploader`] façade
//! - **factory**: [`HttpHandlerFactory`], building façades that share one transport
//! - **executor**: the [`Transport`] seam, its `reqwest` implementation and [`RequestError`]
//! - **models**: request and response data
//! - **auth**: Basic authentication header encoding
//! - **config**: process-wide transport settings
//!
//! # Usage
//!
//! ```no_run
//! use http_handler::{HttpHandlerFactory, HttpHandlerFactoryImpl};
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let factory = HttpHandlerFactoryImpl::new()?;
//!
//! let mut handler = factory.factor("https://example.org/record")?;
//! handler.set_request_method("POST")?;
//! handler.set_basic_authorization("user", "secret")?;
//! handler.set_request_property("Content-Type", "application/json")?;
//! handler.set_output(r#"{"name":"book"}"#)?;
//! println!("{} {}", handler.response_code(), handler.response_text()?);
//!
//! let mut uploader = factory.factor_http_multi_part_uploader("https://example.org/upload")?;
//! uploader.add_form_field("title", "Cover")?;
//! uploader.add_file_part("file", "cover.png", &mut Cursor::new(vec![0x89, 0x50]))?;
//! uploader.done()?;
//! println!("{}", uploader.response_code());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
mod exchange;
pub mod executor;
pub mod factory;
pub mod handler;
pub mod models;
pub mod multipart;

pub use executor::{RequestError, Result, Transport, STATUS_INTERNAL_SERVER_ERROR};
pub use factory::{HttpHandlerFactory, HttpHandlerFactoryImpl};
pub use handler::{HttpHandler, HttpHandlerImpl};
pub use multipart::{HttpMultiPartUploader, HttpMultiPartUploaderImpl, MultipartWriter};
