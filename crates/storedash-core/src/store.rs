use serde::{Deserialize, Serialize};

/// A provisioned store as reported by the provisioning service.
///
/// `status` is a short descriptive string owned by the service
/// (e.g. `"Ready"`, `"Provisioning"`); it is displayed verbatim and
/// never interpreted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub store_id: String,
    pub status: String,
    pub url: String,
}
