use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars. Every variable has a default, so this only fails on unparseable
/// values.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("LODGEKIT_LOG_LEVEL", "info");
    let suppliers_path = PathBuf::from(or_default(
        "LODGEKIT_SUPPLIERS_PATH",
        "./config/suppliers.yaml",
    ));

    let fetch_timeout_secs = parse_u64("LODGEKIT_FETCH_TIMEOUT_SECS", "30")?;
    let fetch_user_agent = or_default(
        "LODGEKIT_FETCH_USER_AGENT",
        "lodgekit/0.1 (catalog-merge)",
    );
    let fetch_max_concurrent_suppliers =
        parse_usize("LODGEKIT_FETCH_MAX_CONCURRENT_SUPPLIERS", "3")?;
    let fetch_max_retries = parse_u32("LODGEKIT_FETCH_MAX_RETRIES", "3")?;
    let fetch_retry_backoff_base_secs =
        parse_u64("LODGEKIT_FETCH_RETRY_BACKOFF_BASE_SECS", "1")?;

    Ok(AppConfig {
        log_level,
        suppliers_path,
        fetch_timeout_secs,
        fetch_user_agent,
        fetch_max_concurrent_suppliers,
        fetch_max_retries,
        fetch_retry_backoff_base_secs,
    })
}
