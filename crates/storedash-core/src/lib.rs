//! Shared domain types and configuration for the storedash workspace.

use thiserror::Error;

mod app_config;
mod config;
mod store;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use store::StoreRecord;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
