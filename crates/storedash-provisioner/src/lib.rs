//! HTTP client for the store-provisioning service.
//!
//! Wraps `reqwest` with typed response deserialization and an error
//! taxonomy that surfaces the service's `detail` messages instead of
//! swallowing failures.

mod client;
mod error;
mod types;

pub use client::ProvisionerClient;
pub use error::ProvisionerError;
pub use types::ServiceStatus;
