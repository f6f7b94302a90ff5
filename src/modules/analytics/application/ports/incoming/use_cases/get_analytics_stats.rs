use async_trait::async_trait;

use crate::modules::analytics::application::domain::AnalyticsStats;

/// A counter that cannot be read is reported as zero.
#[async_trait]
pub trait GetAnalyticsStatsUseCase: Send + Sync {
    async fn execute(&self) -> AnalyticsStats;
}
