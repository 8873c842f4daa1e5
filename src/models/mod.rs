//! Data models for HTTP requests and responses.
//!
//! Neither side outlives a single exchange: a [`PreparedRequest`] is built by
//! a façade, consumed by a transport, and the resulting [`HttpResponse`] is
//! read back by the caller.

pub mod request;
pub mod response;

pub use request::{HttpMethod, PreparedRequest, RequestBody};
pub use response::HttpResponse;
