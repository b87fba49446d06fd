use thiserror::Error;

/// Errors returned by the provisioning service client.
#[derive(Debug, Error)]
pub enum ProvisionerError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status. `detail` carries the
    /// service's error message when the body provides one.
    #[error("provisioning service error (HTTP {status}): {detail}")]
    Api { status: u16, detail: String },

    /// The response body could not be deserialized into the expected type.
    #[error("unexpected response from {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not usable as an HTTP endpoint.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
