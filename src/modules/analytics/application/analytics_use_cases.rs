use std::sync::Arc;

use crate::modules::analytics::application::ports::incoming::use_cases::{
    GetAnalyticsStatsUseCase, TrackProjectViewUseCase, TrackResumeDownloadUseCase,
};

#[derive(Clone)]
pub struct AnalyticsUseCases {
    pub track_resume_download: Arc<dyn TrackResumeDownloadUseCase + Send + Sync>,
    pub track_project_view: Arc<dyn TrackProjectViewUseCase + Send + Sync>,
    pub stats: Arc<dyn GetAnalyticsStatsUseCase + Send + Sync>,
}
