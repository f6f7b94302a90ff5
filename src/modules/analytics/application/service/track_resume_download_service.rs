use async_trait::async_trait;
use tracing::{debug, error};

use crate::modules::analytics::application::domain::AnalyticsEvent;
use crate::modules::analytics::application::ports::incoming::use_cases::TrackResumeDownloadUseCase;
use crate::modules::analytics::application::ports::outgoing::AnalyticsStore;

pub struct TrackResumeDownloadService<S>
where
    S: AnalyticsStore,
{
    store: S,
}

impl<S> TrackResumeDownloadService<S>
where
    S: AnalyticsStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> TrackResumeDownloadUseCase for TrackResumeDownloadService<S>
where
    S: AnalyticsStore + Send + Sync,
{
    async fn execute(&self) {
        match self.store.record(&AnalyticsEvent::resume_download()).await {
            Ok(()) => debug!("Resume download tracked"),
            Err(e) => error!("Error tracking resume download: {}", e),
        }
    }
}
