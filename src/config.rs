use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://ff77-179-6-1-44.ngrok-free.app/api/ruc";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "RUC_API_BASE_URL";

/// Environment variable holding an optional request timeout in seconds.
pub const TIMEOUT_ENV: &str = "RUC_API_TIMEOUT_SECS";

/// Rows shown per page in the list view.
pub const PAGE_SIZE: usize = 10;

pub fn base_url_from_env() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Request timeout from the environment. Unset or unparsable means no timeout.
pub fn timeout_from_env() -> Option<Duration> {
    std::env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
