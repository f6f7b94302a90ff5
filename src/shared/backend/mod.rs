mod config;
mod error;
mod local_store;
mod rest_client;

pub use config::BackendConfig;
pub use error::StoreError;
pub use local_store::LocalStore;
pub use rest_client::{Query, RestClient};

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Which content store the process talks to. Chosen once at startup.
#[derive(Debug, Clone)]
pub enum Backend {
    Configured(RestClient),
    Disabled(Arc<LocalStore>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendMode {
    Configured,
    Disabled,
}

impl BackendMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendMode::Configured => "configured",
            BackendMode::Disabled => "disabled",
        }
    }
}

impl Backend {
    /// Build the remote client when settings are present, otherwise fall back
    /// to the local durable store.
    pub fn select(config: Option<&BackendConfig>, local: LocalStore) -> Result<Self, StoreError> {
        match config {
            Some(config) => {
                let client = RestClient::new(config)?;
                info!(url = %client.base_url(), "Content store configured");
                Ok(Backend::Configured(client))
            }
            None => {
                warn!(
                    path = %local.path().display(),
                    "Content store not configured: reads return empty, writes are rejected, analytics go to local storage"
                );
                Ok(Backend::Disabled(Arc::new(local)))
            }
        }
    }

    pub fn mode(&self) -> BackendMode {
        match self {
            Backend::Configured(_) => BackendMode::Configured,
            Backend::Disabled(_) => BackendMode::Disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_select_without_config_is_disabled() {
        let backend = Backend::select(None, LocalStore::new("unused.json")).unwrap();
        assert_eq!(backend.mode(), BackendMode::Disabled);
        assert_eq!(backend.mode().as_str(), "disabled");
    }

    #[test]
    fn test_select_with_config_is_configured() {
        let config = BackendConfig {
            url: "https://store.example.com".to_string(),
            anon_key: "anon".to_string(),
            service_key: None,
            request_timeout: Duration::from_secs(5),
        };
        let backend = Backend::select(Some(&config), LocalStore::new("unused.json")).unwrap();
        assert_eq!(backend.mode(), BackendMode::Configured);
    }
}
