use std::path::PathBuf;
use std::sync::Arc;

use actix_web::web;

use crate::modules::analytics::application::analytics_use_cases::AnalyticsUseCases;
use crate::modules::analytics::application::ports::incoming::use_cases::{
    GetAnalyticsStatsUseCase, TrackProjectViewUseCase, TrackResumeDownloadUseCase,
};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::use_cases::LoginAdminUseCase;
use crate::modules::contact::adapter::outgoing::ContactStoreDisabled;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::contact::application::service::SubmitContactService;
use crate::modules::multimedia::application::media_use_cases::MultimediaUseCases;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsUseCase, GetProjectBySlugUseCase, GetProjectsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::projects_resource::ProjectsResource;
use crate::modules::resume::adapter::outgoing::ResumeStoreDisabled;
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::resume::application::service::{GetResumeService, SaveResumeService};
use crate::shared::backend::BackendMode;
use crate::shared::config::AppConfig;
use crate::tests::support::in_memory::EditorHarness;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` that behaves like a server with no content store
/// configured. Individual use cases are swapped in per test.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    project: ProjectUseCases,
    projects: Option<Arc<ProjectsResource>>,
    media: MultimediaUseCases,
    contact: ContactUseCases,
    analytics: AnalyticsUseCases,
    resume: ResumeUseCases,
    backend_mode: BackendMode,
    resume_file_path: PathBuf,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginAdminUseCase),
            },
            project: disabled_project_use_cases(),
            projects: None,
            media: disabled_media_use_cases(),
            contact: ContactUseCases {
                submit: Arc::new(SubmitContactService::new(ContactStoreDisabled)),
            },
            analytics: AnalyticsUseCases {
                track_resume_download: Arc::new(RecordingTrackResumeDownload::default()),
                track_project_view: Arc::new(RecordingTrackProjectView::default()),
                stats: Arc::new(StubAnalyticsStats::default()),
            },
            resume: resume_use_cases(ResumeStoreDisabled),
            backend_mode: BackendMode::Disabled,
            resume_file_path: PathBuf::from(AppConfig::DEFAULT_RESUME_FILE_PATH),
        }
    }
}

fn resume_use_cases<S>(store: S) -> ResumeUseCases
where
    S: ResumeStore + Clone + 'static,
{
    ResumeUseCases {
        get: Arc::new(GetResumeService::new(store.clone())),
        save: Arc::new(SaveResumeService::new(store)),
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_project(mut self, use_cases: ProjectUseCases) -> Self {
        self.project = use_cases;
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_featured_projects(
        mut self,
        uc: impl GetFeaturedProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_featured = Arc::new(uc);
        self
    }

    pub fn with_get_project_by_slug(
        mut self,
        uc: impl GetProjectBySlugUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_media(mut self, use_cases: MultimediaUseCases) -> Self {
        self.media = use_cases;
        self
    }

    /// Project use cases, the mounted list and media all backed by the harness.
    pub fn with_editor_harness(mut self, harness: &EditorHarness) -> Self {
        self.project = harness.project_use_cases();
        self.projects = Some(Arc::clone(&harness.projects));
        self.media = harness.media_use_cases();
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_track_resume_download(
        mut self,
        uc: impl TrackResumeDownloadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.analytics.track_resume_download = Arc::new(uc);
        self
    }

    pub fn with_track_project_view(
        mut self,
        uc: impl TrackProjectViewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.analytics.track_project_view = Arc::new(uc);
        self
    }

    pub fn with_analytics_stats(
        mut self,
        uc: impl GetAnalyticsStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.analytics.stats = Arc::new(uc);
        self
    }

    pub fn with_resume_store<S>(mut self, store: S) -> Self
    where
        S: ResumeStore + Clone + 'static,
    {
        self.resume = resume_use_cases(store);
        self
    }

    pub fn with_resume_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.resume_file_path = path.into();
        self
    }

    pub fn with_backend_mode(mut self, mode: BackendMode) -> Self {
        self.backend_mode = mode;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let projects = self
            .projects
            .unwrap_or_else(|| Arc::new(ProjectsResource::new(self.project.get_list.clone())));

        web::Data::new(AppState {
            auth: self.auth,
            project: self.project,
            projects,
            media: self.media,
            contact: self.contact,
            analytics: self.analytics,
            resume: self.resume,
            backend_mode: self.backend_mode,
            resume_file_path: self.resume_file_path,
        })
    }
}
