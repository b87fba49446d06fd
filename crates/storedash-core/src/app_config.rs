/// Application configuration for the dashboard CLI.
///
/// Everything has a working default pointed at a local provisioning
/// service; see [`crate::load_app_config`] for the env vars involved.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the store-provisioning service.
    pub api_base_url: String,
    /// Per-request timeout for calls to the service.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}
