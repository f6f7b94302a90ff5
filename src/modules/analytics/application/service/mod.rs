mod get_analytics_stats_service;
mod track_project_view_service;
mod track_resume_download_service;

pub use get_analytics_stats_service::GetAnalyticsStatsService;
pub use track_project_view_service::TrackProjectViewService;
pub use track_resume_download_service::TrackResumeDownloadService;

#[cfg(test)]
pub(crate) mod test_store {
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::modules::analytics::application::domain::{AnalyticsEvent, EventType};
    use crate::modules::analytics::application::ports::outgoing::AnalyticsStore;
    use crate::shared::backend::StoreError;

    #[derive(Default)]
    pub struct CountingStore {
        pub events: Mutex<Vec<AnalyticsEvent>>,
        pub failures: HashMap<EventType, StoreError>,
        pub fail_writes: bool,
    }

    #[async_trait]
    impl AnalyticsStore for CountingStore {
        async fn record(&self, event: &AnalyticsEvent) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Transport("down".to_string()));
            }
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }

        async fn count(&self, event_type: EventType) -> Result<u64, StoreError> {
            if let Some(e) = self.failures.get(&event_type) {
                return Err(e.clone());
            }
            Ok(self
                .events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.event_type == event_type)
                .count() as u64)
        }
    }
}
