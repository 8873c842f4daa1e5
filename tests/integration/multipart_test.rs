//! Multipart uploader against a mock server.

use super::test_factory;
use http_handler::multipart::MULTIPART_USER_AGENT;
use http_handler::{HttpHandlerFactory, RequestError};
use mockito::Matcher;
use std::fs::File;
use std::io::{Cursor, Write};
use tempfile::TempDir;

const EXPECTED_BODY: &str = concat!(
    "--xxxYYYxxx\n",
    "Content-Disposition: form-data; name=\"some\"\n",
    "Content-Type: text/plain; charset=UTF-8\n",
    "\n",
    "value\n",
    "--xxxYYYxxx\n",
    "Content-Disposition: form-data; name=\"file\"; filename=\"adele.png\"\n",
    "Content-Type: image/png\n",
    "Content-Transfer-Encoding: binary\n",
    "\n",
    "a string\n",
    "--xxxYYYxxx--\n",
);

#[test]
fn test_upload_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("adele.png");
    File::create(&file_path)
        .and_then(|mut file| file.write_all(b"a string"))
        .expect("Failed to write test file");

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/record/binary:1/master")
        .match_header("accept", "application/vnd.uub.record+json")
        .match_header("content-type", "multipart/form-data; boundary=xxxYYYxxx")
        .match_header("user-agent", MULTIPART_USER_AGENT)
        .match_body(Matcher::Exact(EXPECTED_BODY.to_string()))
        .with_status(200)
        .with_body("stored")
        .create();

    let mut uploader = test_factory()
        .factor_http_multi_part_uploader(&format!("{}/record/binary:1/master", server.url()))
        .unwrap();
    uploader
        .add_header_field("Accept", "application/vnd.uub.record+json")
        .unwrap();
    uploader.add_form_field("some", "value").unwrap();
    let mut file = File::open(&file_path).expect("Failed to open test file");
    uploader
        .add_file_part("file", "adele.png", &mut file)
        .unwrap();
    uploader.done().unwrap();

    assert_eq!(uploader.response_code(), 200);
    assert_eq!(uploader.response_text().unwrap(), "stored");
    mock.assert();
}

#[test]
fn test_upload_rejected_by_server() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/upload")
        .with_status(415)
        .with_body("unsupported media")
        .create();

    let mut uploader = test_factory()
        .factor_http_multi_part_uploader(&format!("{}/upload", server.url()))
        .unwrap();
    uploader
        .add_file_part("file", "notes.xyz", &mut Cursor::new(b"abc".to_vec()))
        .unwrap();
    uploader.done().unwrap();

    assert_eq!(uploader.response_code(), 415);
    assert_eq!(uploader.response_text(), Err(RequestError::ErrorStatus(415)));
    assert_eq!(uploader.error_text().unwrap(), "unsupported media");
}

#[test]
fn test_headers_rejected_once_parts_started() {
    let server = mockito::Server::new();
    let mut uploader = test_factory()
        .factor_http_multi_part_uploader(&format!("{}/upload", server.url()))
        .unwrap();

    uploader.add_form_field("some", "value").unwrap();
    let err = uploader
        .add_header_field("Accept", "text/plain")
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("Headers can not be set after connection is setup"));
}
