use async_trait::async_trait;
use tracing::error;

use crate::modules::analytics::application::domain::{AnalyticsStats, EventType};
use crate::modules::analytics::application::ports::incoming::use_cases::GetAnalyticsStatsUseCase;
use crate::modules::analytics::application::ports::outgoing::AnalyticsStore;

pub struct GetAnalyticsStatsService<S>
where
    S: AnalyticsStore,
{
    store: S,
}

impl<S> GetAnalyticsStatsService<S>
where
    S: AnalyticsStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn count_or_zero(&self, event_type: EventType) -> u64 {
        self.store.count(event_type).await.unwrap_or_else(|e| {
            error!("Error counting {} events: {}", event_type.as_str(), e);
            0
        })
    }
}

#[async_trait]
impl<S> GetAnalyticsStatsUseCase for GetAnalyticsStatsService<S>
where
    S: AnalyticsStore + Send + Sync,
{
    async fn execute(&self) -> AnalyticsStats {
        let (resume_downloads, project_views) = futures::join!(
            self.count_or_zero(EventType::ResumeDownload),
            self.count_or_zero(EventType::ProjectView),
        );

        AnalyticsStats {
            resume_downloads,
            project_views,
        }
    }
}
