//! Request/response façade against a mock server.

use super::{closed_port_url, test_factory};
use http_handler::{HttpHandlerFactory, RequestError};
use mockito::Matcher;
use std::io::{Cursor, Read};

#[test]
fn test_get_returns_status_headers_and_text() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/record/book:1")
        .match_header("accept", "application/vnd.uub.record+json")
        .with_status(200)
        .with_header("content-type", "application/vnd.uub.record+json")
        .with_header("x-record-id", "book:1")
        .with_body(r#"{"id":"book:1"}"#)
        .create();

    let mut handler = test_factory()
        .factor(&format!("{}/record/book:1", server.url()))
        .unwrap();
    handler.set_request_method("GET").unwrap();
    handler
        .set_request_property("Accept", "application/vnd.uub.record+json")
        .unwrap();

    assert_eq!(handler.response_code(), 200);
    assert_eq!(handler.response_text().unwrap(), r#"{"id":"book:1"}"#);
    assert_eq!(
        handler.header_field("Content-Type").as_deref(),
        Some("application/vnd.uub.record+json")
    );
    assert_eq!(handler.header_field("X-Record-Id").as_deref(), Some("book:1"));
    assert_eq!(handler.header_field("X-Missing"), None);

    mock.assert();
}

#[test]
fn test_post_sends_text_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/record")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(r#"{"name":"åäö"}"#.to_string()))
        .with_status(201)
        .with_body("created")
        .create();

    let mut handler = test_factory()
        .factor(&format!("{}/record", server.url()))
        .unwrap();
    handler.set_request_method("POST").unwrap();
    handler
        .set_request_property("Content-Type", "application/json")
        .unwrap();
    handler.set_output(r#"{"name":"åäö"}"#).unwrap();

    assert_eq!(handler.response_code(), 201);
    assert_eq!(handler.response_text().unwrap(), "created");
    mock.assert();
}

#[test]
fn test_put_streams_body() {
    let mut server = mockito::Server::new();
    let payload = "0123456789abcdef".repeat(1500);
    let mock = server
        .mock("PUT", "/binary/master")
        .match_body(Matcher::Exact(payload.clone()))
        .with_status(200)
        .create();

    let mut handler = test_factory()
        .factor(&format!("{}/binary/master", server.url()))
        .unwrap();
    handler.set_request_method("PUT").unwrap();
    handler
        .set_stream_output(Box::new(Cursor::new(payload.into_bytes())))
        .unwrap();

    assert_eq!(handler.response_code(), 200);
    mock.assert();
}

#[test]
fn test_basic_authorization_is_sent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/record/book:1")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .create();

    let mut handler = test_factory()
        .factor(&format!("{}/record/book:1", server.url()))
        .unwrap();
    handler.set_request_method("DELETE").unwrap();
    handler.set_basic_authorization("user", "pass").unwrap();

    assert_eq!(handler.response_code(), 200);
    mock.assert();
}

#[test]
fn test_binary_response() {
    let mut server = mockito::Server::new();
    let image = vec![0x89, b'P', b'N', b'G', 0x00, 0xFF, 0x10];
    let _mock = server
        .mock("GET", "/binary/master")
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(image.clone())
        .create();

    let mut handler = test_factory()
        .factor(&format!("{}/binary/master", server.url()))
        .unwrap();

    let mut received = Vec::new();
    handler
        .response_binary()
        .unwrap()
        .read_to_end(&mut received)
        .unwrap();
    assert_eq!(received, image);
}

#[test]
fn test_error_status_exposes_error_text() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/record/missing")
        .with_status(404)
        .with_body("no record with id missing")
        .create();

    let mut handler = test_factory()
        .factor(&format!("{}/record/missing", server.url()))
        .unwrap();

    assert_eq!(handler.response_code(), 404);
    assert_eq!(handler.response_text(), Err(RequestError::ErrorStatus(404)));
    assert_eq!(handler.error_text().unwrap(), "no record with id missing");
}

#[test]
fn test_request_is_sent_only_once() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/once")
        .with_status(200)
        .with_body("first")
        .expect(1)
        .create();

    let mut handler = test_factory()
        .factor(&format!("{}/once", server.url()))
        .unwrap();

    assert_eq!(handler.response_code(), 200);
    assert_eq!(handler.response_text().unwrap(), "first");
    assert_eq!(handler.response_code(), 200);
    mock.assert();
}

#[test]
fn test_unreachable_server_maps_to_500() {
    let mut handler = test_factory().factor(&closed_port_url()).unwrap();

    assert_eq!(handler.response_code(), 500);
    let err = handler.response_text().unwrap_err();
    assert!(err.is_transport(), "unexpected error: {:?}", err);
    assert!(handler.error_text().is_err());
}

#[test]
fn test_encoded_body_passes_through_untouched() {
    // gzip of "hello"
    let gzipped: Vec<u8> = vec![
        31, 139, 8, 0, 0, 0, 0, 0, 2, 3, 203, 72, 205, 201, 201, 7, 0, 134, 166, 16, 54, 5, 0, 0,
        0,
    ];
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/binary/archive")
        .match_header("accept-encoding", Matcher::Missing)
        .with_status(200)
        .with_header("content-encoding", "gzip")
        .with_body(gzipped.clone())
        .create();

    let mut handler = test_factory()
        .factor(&format!("{}/binary/archive", server.url()))
        .unwrap();

    assert_eq!(handler.response_code(), 200);
    assert_eq!(
        handler.header_field("Content-Encoding").as_deref(),
        Some("gzip")
    );
    let mut received = Vec::new();
    handler
        .response_binary()
        .unwrap()
        .read_to_end(&mut received)
        .unwrap();
    assert_eq!(received, gzipped);
    mock.assert();
}
