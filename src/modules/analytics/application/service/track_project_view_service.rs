use async_trait::async_trait;
use tracing::{debug, error};
use uuid::Uuid;

use crate::modules::analytics::application::domain::AnalyticsEvent;
use crate::modules::analytics::application::ports::incoming::use_cases::TrackProjectViewUseCase;
use crate::modules::analytics::application::ports::outgoing::AnalyticsStore;

pub struct TrackProjectViewService<S>
where
    S: AnalyticsStore,
{
    store: S,
}

impl<S> TrackProjectViewService<S>
where
    S: AnalyticsStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> TrackProjectViewUseCase for TrackProjectViewService<S>
where
    S: AnalyticsStore + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) {
        match self.store.record(&AnalyticsEvent::project_view(project_id)).await {
            Ok(()) => debug!(%project_id, "Project view tracked"),
            Err(e) => error!(%project_id, "Error tracking project view: {}", e),
        }
    }
}
