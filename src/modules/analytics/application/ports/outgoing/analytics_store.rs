use async_trait::async_trait;

use crate::modules::analytics::application::domain::{AnalyticsEvent, EventType};
use crate::shared::backend::StoreError;

#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    async fn record(&self, event: &AnalyticsEvent) -> Result<(), StoreError>;

    async fn count(&self, event_type: EventType) -> Result<u64, StoreError>;
}
