use async_trait::async_trait;
use serde_json::Value;

use crate::modules::analytics::application::domain::{AnalyticsEvent, EventType};
use crate::modules::analytics::application::ports::outgoing::AnalyticsStore;
use crate::shared::backend::{Query, RestClient, StoreError};

const TABLE: &str = "analytics";

#[derive(Clone)]
pub struct AnalyticsStoreRemote {
    client: RestClient,
}

impl AnalyticsStoreRemote {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalyticsStore for AnalyticsStoreRemote {
    async fn record(&self, event: &AnalyticsEvent) -> Result<(), StoreError> {
        self.client
            .insert_minimal(TABLE, std::slice::from_ref(event))
            .await
    }

    /// Counts the matching rows by fetching their ids.
    async fn count(&self, event_type: EventType) -> Result<u64, StoreError> {
        let query = Query::new()
            .select("id")
            .eq("event_type", event_type.as_str());

        let rows: Vec<Value> = self.client.select(TABLE, &query).await?;
        Ok(rows.len() as u64)
    }
}
