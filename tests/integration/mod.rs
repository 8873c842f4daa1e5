//! Integration tests module for HTTP Handler
//!
//! Shared setup for the tests that exercise the façades over real HTTP.

pub mod factory_test;
pub mod handler_test;
pub mod multipart_test;

use http_handler::executor::ExecutionConfig;
use http_handler::HttpHandlerFactoryImpl;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Factory with a short timeout that ignores the global configuration.
pub fn test_factory() -> HttpHandlerFactoryImpl {
    init_test_env();
    HttpHandlerFactoryImpl::with_config(&ExecutionConfig::new(Duration::from_secs(10)))
        .expect("Failed to build factory")
}

/// A loopback URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}
