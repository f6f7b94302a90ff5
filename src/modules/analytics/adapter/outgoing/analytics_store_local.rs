use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::modules::analytics::application::domain::{AnalyticsEvent, EventType};
use crate::modules::analytics::application::ports::outgoing::AnalyticsStore;
use crate::shared::backend::{LocalStore, StoreError};

/// Counters kept in the local durable store when no content store is
/// configured. Never reconciled with the remote table.
#[derive(Debug, Clone)]
pub struct AnalyticsStoreLocal {
    store: Arc<LocalStore>,
}

impl AnalyticsStoreLocal {
    pub const RESUME_DOWNLOADS_KEY: &'static str = "resume_downloads";
    pub const PROJECT_VIEWS_KEY: &'static str = "project_views";

    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    fn key(event_type: EventType) -> &'static str {
        match event_type {
            EventType::ResumeDownload => Self::RESUME_DOWNLOADS_KEY,
            EventType::ProjectView => Self::PROJECT_VIEWS_KEY,
        }
    }
}

#[async_trait]
impl AnalyticsStore for AnalyticsStoreLocal {
    async fn record(&self, event: &AnalyticsEvent) -> Result<(), StoreError> {
        let timestamp = Utc::now().to_rfc3339();
        let entry = match event.project_id {
            Some(project_id) => json!({ "project_id": project_id, "timestamp": timestamp }),
            None => json!({ "timestamp": timestamp }),
        };

        self.store.append(Self::key(event.event_type), entry).await?;
        Ok(())
    }

    async fn count(&self, event_type: EventType) -> Result<u64, StoreError> {
        let list = self.store.read_list(Self::key(event_type)).await?;
        Ok(list.len() as u64)
    }
}
