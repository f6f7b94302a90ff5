// src/shared/backend/config.rs
use std::env;
use std::time::Duration;

/// Connection settings for the hosted data/storage service.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    /// Elevated key used for writes when present. Reads always use the anon key.
    pub service_key: Option<String>,
    pub request_timeout: Duration,
}

impl BackendConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

    /// Returns `None` when either the URL or the anon key is missing or blank,
    /// which selects the disabled backend.
    pub fn from_env() -> Option<Self> {
        let url = non_blank_var("CONTENT_STORE_URL")?;
        let anon_key = non_blank_var("CONTENT_STORE_ANON_KEY")?;
        let service_key = non_blank_var("CONTENT_STORE_SERVICE_KEY");

        let timeout_secs = env::var("CONTENT_STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECS);

        Some(Self {
            url,
            anon_key,
            service_key,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
