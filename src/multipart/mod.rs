//! multipart/form-data uploads.
//!
//! [`MultipartWriter`] is the encoder and can be used on its own with any
//! [`std::io::Write`]. [`HttpMultiPartUploaderImpl`] wraps it in a
//! single-exchange façade.

pub mod content_type;
pub mod uploader;
pub mod writer;

pub use content_type::guess_content_type;
pub use uploader::{HttpMultiPartUploader, HttpMultiPartUploaderImpl, MULTIPART_USER_AGENT};
pub use writer::{MultipartWriter, DEFAULT_BOUNDARY};
