//! Client for the store-provisioning REST service.
//!
//! One method per endpoint, each returning a typed result. Non-2xx
//! responses are turned into [`ProvisionerError::Api`] carrying the
//! service's `detail` message, so callers see why a request failed
//! instead of a bare status code.

use std::time::Duration;

use reqwest::{Client, Url};
use storedash_core::{AppConfig, StoreRecord};

use crate::error::ProvisionerError;
use crate::types::{AuditResponse, DeleteResponse, ServiceStatus, StoreListResponse};

/// Client for the store-provisioning service.
///
/// Holds the HTTP client and the normalized base URL. Use
/// [`ProvisionerClient::from_config`] for production or
/// [`ProvisionerClient::with_base_url`] to point at a mock server in tests.
pub struct ProvisionerClient {
    client: Client,
    base_url: Url,
}

impl ProvisionerClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ProvisionerError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProvisionerError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ProvisionerError::InvalidBaseUrl`] if
    /// `base_url` is not a valid HTTP base.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ProvisionerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| ProvisionerError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        // Reject non-hierarchical URLs up front so endpoint() can always
        // append path segments.
        if parsed.cannot_be_a_base() {
            return Err(ProvisionerError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot serve as a base for path segments".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Lists all provisioned stores.
    ///
    /// Calls `GET /stores`. A response without a `stores` field is treated
    /// as an empty collection.
    ///
    /// # Errors
    ///
    /// - [`ProvisionerError::Api`] on a non-2xx response.
    /// - [`ProvisionerError::Http`] on network failure.
    /// - [`ProvisionerError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn list_stores(&self) -> Result<Vec<StoreRecord>, ProvisionerError> {
        let url = self.endpoint(&["stores"]);
        let body = self.request_json(self.client.get(url), "GET /stores").await?;
        let envelope: StoreListResponse = parse_body(body, "GET /stores")?;
        Ok(envelope.stores)
    }

    /// Requests provisioning of a new store and returns the created record.
    ///
    /// Calls `POST /stores` with no payload. Provisioning can take a while
    /// on the service side; the returned `status` reports how far it got.
    ///
    /// # Errors
    ///
    /// - [`ProvisionerError::Api`] if the service refuses (e.g. the store
    ///   limit is reached) or fails to provision.
    /// - [`ProvisionerError::Http`] on network failure.
    /// - [`ProvisionerError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn create_store(&self) -> Result<StoreRecord, ProvisionerError> {
        let url = self.endpoint(&["stores"]);
        let body = self
            .request_json(self.client.post(url), "POST /stores")
            .await?;
        let record: StoreRecord = parse_body(body, "POST /stores")?;
        tracing::debug!(store_id = %record.store_id, status = %record.status, "store created");
        Ok(record)
    }

    /// Deletes a store by id and returns the id the service confirmed.
    ///
    /// Calls `DELETE /stores/{store_id}`; the id is appended as a single
    /// percent-encoded path segment.
    ///
    /// # Errors
    ///
    /// - [`ProvisionerError::Api`] on a non-2xx response.
    /// - [`ProvisionerError::Http`] on network failure.
    /// - [`ProvisionerError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn delete_store(&self, store_id: &str) -> Result<String, ProvisionerError> {
        let url = self.endpoint(&["stores", store_id]);
        let context = format!("DELETE /stores/{store_id}");
        let body = self.request_json(self.client.delete(url), &context).await?;
        let envelope: DeleteResponse = parse_body(body, &context)?;
        tracing::debug!(store_id = %envelope.deleted, "store deleted");
        Ok(envelope.deleted)
    }

    /// Fetches the service's audit log of create/delete events.
    ///
    /// # Errors
    ///
    /// - [`ProvisionerError::Api`] on a non-2xx response.
    /// - [`ProvisionerError::Http`] on network failure.
    /// - [`ProvisionerError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn audit_log(&self) -> Result<Vec<String>, ProvisionerError> {
        let url = self.endpoint(&["audit"]);
        let body = self.request_json(self.client.get(url), "GET /audit").await?;
        let envelope: AuditResponse = parse_body(body, "GET /audit")?;
        Ok(envelope.events)
    }

    /// Fetches the banner message from the service root endpoint.
    ///
    /// # Errors
    ///
    /// - [`ProvisionerError::Api`] on a non-2xx response.
    /// - [`ProvisionerError::Http`] on network failure.
    /// - [`ProvisionerError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn service_status(&self) -> Result<ServiceStatus, ProvisionerError> {
        let url = self.endpoint(&[]);
        let body = self.request_json(self.client.get(url), "GET /").await?;
        parse_body(body, "GET /")
    }

    /// Builds the full request URL by appending percent-encoded path segments
    /// to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Infallible: cannot_be_a_base was checked at construction.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
        }
        url
    }

    /// Sends a request and parses the response body as JSON.
    ///
    /// Non-2xx statuses become [`ProvisionerError::Api`] with the service's
    /// `detail` message extracted from the body when present.
    async fn request_json(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<serde_json::Value, ProvisionerError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProvisionerError::Api {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ProvisionerError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Deserializes a JSON body into the expected response type, tagging
/// failures with the originating request.
fn parse_body<T: serde::de::DeserializeOwned>(
    body: serde_json::Value,
    context: &str,
) -> Result<T, ProvisionerError> {
    serde_json::from_value(body).map_err(|e| ProvisionerError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

/// Pulls the FastAPI-style `{"detail": ...}` message out of an error body,
/// falling back to the raw body text.
fn extract_detail(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        });

    match detail {
        Some(msg) => msg,
        None if body.trim().is_empty() => "unknown error".to_string(),
        None => body.trim().to_string(),
    }
}
