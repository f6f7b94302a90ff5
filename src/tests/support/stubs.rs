use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::analytics::application::domain::AnalyticsStats;
use crate::modules::analytics::application::ports::incoming::use_cases::{
    GetAnalyticsStatsUseCase, TrackProjectViewUseCase, TrackResumeDownloadUseCase,
};
use crate::modules::auth::application::use_cases::{
    LoginAdminRequest, LoginAdminResponse, LoginAdminUseCase, LoginError,
};
use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::modules::multimedia::application::media_use_cases::MultimediaUseCases;
use crate::modules::multimedia::adapter::outgoing::MediaStorageDisabled;
use crate::modules::multimedia::application::services::{
    DeleteMediaService, GetResumeUrlService, UploadMediaService, UploadResumeFileService,
};
use crate::modules::project::adapter::outgoing::ProjectStoreDisabled;
use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsUseCase, GetProjectBySlugUseCase, GetProjectsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetFeaturedProjectsService,
    GetProjectBySlugService, GetProjectsService, UpdateProjectService,
};

/* ---------------- auth ---------------- */

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginAdminRequest) -> Result<LoginAdminResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

/* ---------------- projects ---------------- */

#[derive(Clone)]
pub struct StubGetProjectsUseCase {
    projects: Vec<Project>,
}

impl StubGetProjectsUseCase {
    pub fn returning(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Vec<Project> {
        self.projects.clone()
    }
}

#[derive(Clone)]
pub struct StubGetFeaturedProjectsUseCase {
    projects: Vec<Project>,
}

impl StubGetFeaturedProjectsUseCase {
    pub fn returning(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl GetFeaturedProjectsUseCase for StubGetFeaturedProjectsUseCase {
    async fn execute(&self) -> Vec<Project> {
        self.projects.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProjectBySlugUseCase {
    result: Option<Project>,
}

impl StubGetProjectBySlugUseCase {
    pub fn found(project: Project) -> Self {
        Self {
            result: Some(project),
        }
    }

    pub fn not_found() -> Self {
        Self { result: None }
    }
}

#[async_trait]
impl GetProjectBySlugUseCase for StubGetProjectBySlugUseCase {
    async fn execute(&self, _slug: &str) -> Option<Project> {
        self.result.clone()
    }
}

/// Project use cases over the disabled store: empty reads, writes report 503.
pub fn disabled_project_use_cases() -> ProjectUseCases {
    ProjectUseCases {
        get_list: Arc::new(GetProjectsService::new(ProjectStoreDisabled)),
        get_featured: Arc::new(GetFeaturedProjectsService::new(ProjectStoreDisabled)),
        get_by_slug: Arc::new(GetProjectBySlugService::new(ProjectStoreDisabled)),
        create: Arc::new(CreateProjectService::new(ProjectStoreDisabled)),
        update: Arc::new(UpdateProjectService::new(ProjectStoreDisabled)),
        delete: Arc::new(DeleteProjectService::new(ProjectStoreDisabled)),
    }
}

/* ---------------- media ---------------- */

pub fn disabled_media_use_cases() -> MultimediaUseCases {
    let policy = UploadPolicy::default();
    MultimediaUseCases {
        upload: Arc::new(UploadMediaService::new(MediaStorageDisabled, policy.clone())),
        delete: Arc::new(DeleteMediaService::new(MediaStorageDisabled)),
        upload_resume: Arc::new(UploadResumeFileService::new(
            MediaStorageDisabled,
            policy.clone(),
            "resume.pdf",
        )),
        resume_url: Arc::new(GetResumeUrlService::new(MediaStorageDisabled, "resume.pdf")),
        policy,
    }
}

/* ---------------- analytics ---------------- */

/// Counts resume downloads. Clones share the counter.
#[derive(Default, Clone)]
pub struct RecordingTrackResumeDownload {
    calls: Arc<Mutex<usize>>,
}

impl RecordingTrackResumeDownload {
    pub fn count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TrackResumeDownloadUseCase for RecordingTrackResumeDownload {
    async fn execute(&self) {
        *self.calls.lock().unwrap() += 1;
    }
}

/// Records viewed project ids. Clones share the log.
#[derive(Default, Clone)]
pub struct RecordingTrackProjectView {
    calls: Arc<Mutex<Vec<Uuid>>>,
}

impl RecordingTrackProjectView {
    pub fn calls(&self) -> Vec<Uuid> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrackProjectViewUseCase for RecordingTrackProjectView {
    async fn execute(&self, project_id: Uuid) {
        self.calls.lock().unwrap().push(project_id);
    }
}

#[derive(Default, Clone)]
pub struct StubAnalyticsStats(pub AnalyticsStats);

#[async_trait]
impl GetAnalyticsStatsUseCase for StubAnalyticsStats {
    async fn execute(&self) -> AnalyticsStats {
        self.0
    }
}
