//! Factory for façades.
//!
//! A factory owns one transport and hands it to every handler and uploader
//! it builds, so all of them share the same client settings.

use crate::executor::config::ExecutionConfig;
use crate::executor::error::Result;
use crate::executor::transport::{ReqwestTransport, Transport};
use crate::executor::validate_url;
use crate::handler::{HttpHandler, HttpHandlerImpl};
use crate::multipart::uploader::{HttpMultiPartUploader, HttpMultiPartUploaderImpl};
use log::debug;
use std::sync::Arc;

/// Builds façades for a URL.
pub trait HttpHandlerFactory: Send + Sync {
    /// Builds a handler for a plain request to `url`.
    fn factor(&self, url: &str) -> Result<Box<dyn HttpHandler>>;

    /// Builds an uploader for a multipart request to `url`.
    fn factor_http_multi_part_uploader(&self, url: &str)
        -> Result<Box<dyn HttpMultiPartUploader>>;
}

/// [`HttpHandlerFactory`] sharing one [`Transport`].
#[derive(Clone)]
pub struct HttpHandlerFactoryImpl {
    transport: Arc<dyn Transport>,
}

impl HttpHandlerFactoryImpl {
    /// Builds a `reqwest` transport from the global configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(&ExecutionConfig::from_global_config())
    }

    /// Builds a `reqwest` transport from `config`.
    pub fn with_config(config: &ExecutionConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Uses an existing transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

impl HttpHandlerFactory for HttpHandlerFactoryImpl {
    fn factor(&self, url: &str) -> Result<Box<dyn HttpHandler>> {
        validate_url(url)?;
        debug!("factoring handler for {}", url);
        Ok(Box::new(HttpHandlerImpl::new(self.transport.clone(), url)))
    }

    fn factor_http_multi_part_uploader(
        &self,
        url: &str,
    ) -> Result<Box<dyn HttpMultiPartUploader>> {
        validate_url(url)?;
        debug!("factoring multipart uploader for {}", url);
        Ok(Box::new(HttpMultiPartUploaderImpl::new(
            self.transport.clone(),
            url,
        )))
    }
}
