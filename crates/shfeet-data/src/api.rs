//! Calls to the storefront's external API.

use serde::Serialize;

use crate::{FetchClient, FetchError, Response};

/// Production API host.
pub const DEFAULT_API_BASE_URL: &str = "https://shfeetbackend.vercel.app";

/// Contact-form endpoint.
pub const CONTACT_PATH: &str = "/api/contact";

/// Order-logging endpoint.
pub const ORDER_PATH: &str = "/api/order";

/// Thin wrapper over the contact and order endpoints.
///
/// Payload types live with the domain; this layer only knows they serialize
/// to JSON.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    client: FetchClient,
}

impl StorefrontApi {
    /// Wrap a client. The client should already carry the base URL.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// POST a contact-form message.
    ///
    /// Non-2xx answers become [`FetchError::HttpError`] carrying the
    /// server's `message` field when it sent one.
    pub async fn submit_contact<T: Serialize + ?Sized>(
        &self,
        message: &T,
    ) -> Result<Response, FetchError> {
        self.post_json(CONTACT_PATH, message).await
    }

    /// POST a paid-order snapshot for logging.
    pub async fn log_order<T: Serialize + ?Sized>(&self, order: &T) -> Result<Response, FetchError> {
        self.post_json(ORDER_PATH, order).await
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, FetchError> {
        let response = self
            .client
            .post(path)
            .header("Accept", "application/json")
            .json(payload)?
            .send()
            .await?;
        response.error_for_status()
    }
}
