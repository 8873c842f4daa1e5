//! HTTP authentication helpers.
//!
//! Only the Basic scheme is supported; callers needing anything else set the
//! `Authorization` header themselves through `set_request_property`.

pub mod basic;

pub use basic::{basic_authorization, BasicCredentials};

/// Name of the header carrying credentials.
pub const AUTHORIZATION_HEADER: &str = "Authorization";
