//! Factory wiring against a mock server.

use super::test_factory;
use http_handler::{HttpHandlerFactory, RequestError};

#[test]
fn test_handlers_from_one_factory_are_independent() {
    let mut server = mockito::Server::new();
    let first = server
        .mock("GET", "/first")
        .with_status(200)
        .with_body("one")
        .create();
    let second = server
        .mock("GET", "/second")
        .with_status(202)
        .with_body("two")
        .create();

    let factory = test_factory();
    let mut handler_one = factory.factor(&format!("{}/first", server.url())).unwrap();
    let mut handler_two = factory.factor(&format!("{}/second", server.url())).unwrap();

    assert_eq!(handler_two.response_code(), 202);
    assert_eq!(handler_one.response_text().unwrap(), "one");
    assert_eq!(handler_two.response_text().unwrap(), "two");

    first.assert();
    second.assert();
}

#[test]
fn test_factor_rejects_invalid_urls() {
    let factory = test_factory();

    assert!(matches!(
        factory.factor("http//missing-colon"),
        Err(RequestError::InvalidUrl(_))
    ));
    assert!(matches!(
        factory.factor("file:///etc/hosts"),
        Err(RequestError::UnsupportedProtocol(_))
    ));
}
