use std::path::PathBuf;

/// Runtime configuration for the catalog pipeline, sourced from environment
/// variables. See [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub suppliers_path: PathBuf,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    /// Upper bound on suppliers fetched concurrently. Fetch order does not
    /// affect merge order; payloads are reassembled in declared order.
    pub fetch_max_concurrent_suppliers: usize,
    /// Additional attempts after the first failure for transient fetch
    /// errors. Set to `0` to disable retries.
    pub fetch_max_retries: u32,
    /// Base delay in seconds for exponential backoff:
    /// `fetch_retry_backoff_base_secs * 2^attempt`.
    pub fetch_retry_backoff_base_secs: u64,
}
