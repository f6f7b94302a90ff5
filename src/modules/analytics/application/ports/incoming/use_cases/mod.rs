mod get_analytics_stats;
mod track_project_view;
mod track_resume_download;

pub use get_analytics_stats::GetAnalyticsStatsUseCase;
pub use track_project_view::TrackProjectViewUseCase;
pub use track_resume_download::TrackResumeDownloadUseCase;
