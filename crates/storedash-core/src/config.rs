use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
/// Every setting has a default, so an empty environment yields a config pointed
/// at a provisioning service on localhost.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = or_default("STOREDASH_API_BASE_URL", "http://127.0.0.1:8000");
    let request_timeout_secs = parse_u64("STOREDASH_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("STOREDASH_USER_AGENT", "storedash/0.1 (store-dashboard)");
    let log_level = or_default("STOREDASH_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_base_url,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}
