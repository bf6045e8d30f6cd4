//! HTTP client utilities for the SHFeet storefront.
//!
//! The storefront only talks to one external service: a small API that
//! accepts contact-form messages and logs paid orders. [`FetchClient`]
//! builds requests against a base URL and hands them to a [`Transport`];
//! [`StorefrontApi`] wraps the two endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use shfeet_data::{FetchClient, StorefrontApi};
//!
//! let client = FetchClient::new()?.with_base_url("https://shfeetbackend.vercel.app");
//! let api = StorefrontApi::new(client);
//! api.log_order(&snapshot).await?;
//! ```

mod api;
mod error;
mod request;
mod response;
mod transport;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub use api::{StorefrontApi, CONTACT_PATH, DEFAULT_API_BASE_URL, ORDER_PATH};
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use transport::{ReqwestTransport, Transport, DEFAULT_TIMEOUT};

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
}

impl FetchClient {
    /// Create a client using reqwest with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client using reqwest with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self::with_transport(ReqwestTransport::new(timeout)?))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            transport: Arc::new(transport),
        }
    }

    /// Set a base URL that will be prepended to relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
        }
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// The request as it will be sent.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(
            method = self.builder.method.as_str(),
            url = %self.builder.url,
            "sending request"
        );
        self.transport.send(self.builder).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Method, Response, StorefrontApi, Transport};
}
