mod download_resume;
mod get_analytics_stats;
mod track_project_view;
mod track_resume_download;

pub use download_resume::download_resume_handler;
pub use get_analytics_stats::get_analytics_stats_handler;
pub use track_project_view::track_project_view_handler;
pub use track_resume_download::{track_resume_download_handler, TrackingAccepted};
pub use get_analytics_stats::__path_get_analytics_stats_handler;
pub use track_resume_download::__path_track_resume_download_handler;
pub use download_resume::__path_download_resume_handler;
pub use track_project_view::__path_track_project_view_handler;
