//! Wire-format envelopes for the provisioning service's JSON responses.

use serde::Deserialize;
use storedash_core::StoreRecord;

/// Envelope for `GET /stores`. The service may omit `stores` entirely;
/// that deserializes as an empty collection rather than an error.
#[derive(Debug, Deserialize)]
pub(crate) struct StoreListResponse {
    #[serde(default)]
    pub stores: Vec<StoreRecord>,
}

/// Envelope for `DELETE /stores/{store_id}`: `{ "deleted": id }`.
#[derive(Debug, Deserialize)]
pub(crate) struct DeleteResponse {
    pub deleted: String,
}

/// Envelope for `GET /audit`: `{ "events": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct AuditResponse {
    #[serde(default)]
    pub events: Vec<String>,
}

/// Banner returned by the service root endpoint.
#[derive(Debug, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
}
