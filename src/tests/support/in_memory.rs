//! In-memory adapters for the outgoing ports, shared by service, editor and
//! route tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::modules::multimedia::application::media_use_cases::MultimediaUseCases;
use crate::modules::multimedia::application::ports::outgoing::MediaStorage;
use crate::modules::multimedia::application::services::{
    DeleteMediaService, GetResumeUrlService, UploadMediaService, UploadResumeFileService,
};
use crate::modules::project::application::domain::{sort_for_display, NewProject, Project};
use crate::modules::project::application::editor::ProjectEditor;
use crate::modules::project::application::ports::outgoing::{
    ProjectChanges, ProjectQuery, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::projects_resource::ProjectsResource;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetFeaturedProjectsService,
    GetProjectBySlugService, GetProjectsService, UpdateProjectService,
};
use crate::modules::resume::application::domain::ResumeDocument;
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::shared::backend::StoreError;
use crate::tests::support::project_test_fixtures::sample_project;

const PUBLIC_BASE: &str = "https://cdn.example.com/storage/v1/object/public";

/* ---------------- projects ---------------- */

#[derive(Clone, Default)]
pub struct InMemoryProjectStore {
    rows: Arc<Mutex<Vec<Project>>>,
}

impl InMemoryProjectStore {
    pub fn with_rows(rows: Vec<Project>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub async fn rows(&self) -> Vec<Project> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjectStore {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut rows = self.rows().await;
        sort_for_display(&mut rows);
        Ok(rows)
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut rows: Vec<Project> = self
            .rows()
            .await
            .into_iter()
            .filter(|p| p.is_featured)
            .collect();
        sort_for_display(&mut rows);
        Ok(rows)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.rows().await.into_iter().find(|p| p.slug == slug))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectStore {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|p| p.slug == data.slug) {
            return Err(ProjectRepositoryError::SlugAlreadyExists);
        }

        let project = data.into_project(Uuid::new_v4(), Utc::now());
        rows.push(project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut rows = self.rows.lock().await;

        if let Some(slug) = changes.slug.as_deref() {
            if rows.iter().any(|p| p.id != id && p.slug == slug) {
                return Err(ProjectRepositoryError::SlugAlreadyExists);
            }
        }

        let project = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        changes.apply_to(project);
        Ok(project.clone())
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        self.rows.lock().await.retain(|p| p.id != id);
        Ok(())
    }
}

/* ---------------- media ---------------- */

#[derive(Clone, Default)]
pub struct InMemoryMediaStorage {
    uploaded: Arc<Mutex<Vec<(Bucket, String, UploadFile)>>>,
    removed: Arc<Mutex<Vec<String>>>,
}

impl InMemoryMediaStorage {
    pub async fn uploaded(&self) -> Vec<UploadFile> {
        self.uploaded
            .lock()
            .await
            .iter()
            .map(|(_, _, file)| file.clone())
            .collect()
    }

    pub async fn object_names(&self) -> Vec<String> {
        self.uploaded
            .lock()
            .await
            .iter()
            .map(|(_, name, _)| name.clone())
            .collect()
    }

    pub async fn removed(&self) -> Vec<String> {
        self.removed.lock().await.clone()
    }
}

#[async_trait]
impl MediaStorage for InMemoryMediaStorage {
    async fn upload(
        &self,
        bucket: Bucket,
        object_name: &str,
        file: UploadFile,
        upsert: bool,
    ) -> Result<(), StoreError> {
        let mut uploaded = self.uploaded.lock().await;
        let exists = uploaded
            .iter()
            .any(|(b, name, _)| *b == bucket && name == object_name);

        if exists && !upsert {
            return Err(StoreError::Conflict(object_name.to_string()));
        }
        uploaded.retain(|(b, name, _)| !(*b == bucket && name == object_name));
        uploaded.push((bucket, object_name.to_string(), file));
        Ok(())
    }

    async fn remove(&self, _bucket: Bucket, object_names: Vec<String>) -> Result<(), StoreError> {
        self.removed.lock().await.extend(object_names);
        Ok(())
    }

    fn public_url(&self, bucket: Bucket, object_name: &str) -> Option<String> {
        Some(format!("{}/{}/{}", PUBLIC_BASE, bucket, object_name))
    }
}

/* ---------------- resume ---------------- */

#[derive(Clone, Default)]
pub struct InMemoryResumeStore {
    document: Arc<Mutex<Option<ResumeDocument>>>,
    failing_reads: Arc<Mutex<usize>>,
}

impl InMemoryResumeStore {
    pub fn with_document(document: ResumeDocument) -> Self {
        let document = ResumeDocument {
            id: document.id.or_else(|| Some(Uuid::new_v4())),
            ..document
        };
        Self {
            document: Arc::new(Mutex::new(Some(document))),
            failing_reads: Arc::default(),
        }
    }

    /// The next `n` reads fail with a transport error; later reads succeed.
    pub fn failing_next_reads(self, n: usize) -> Self {
        Self {
            failing_reads: Arc::new(Mutex::new(n)),
            ..self
        }
    }

    pub async fn document(&self) -> Option<ResumeDocument> {
        self.document.lock().await.clone()
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn get_resume(&self) -> Result<Option<ResumeDocument>, StoreError> {
        let mut failing = self.failing_reads.lock().await;
        if *failing > 0 {
            *failing -= 1;
            return Err(StoreError::Transport("connection reset".to_string()));
        }
        drop(failing);

        Ok(self.document().await)
    }

    async fn upsert_resume(&self, document: &ResumeDocument) -> Result<ResumeDocument, StoreError> {
        let stored = ResumeDocument {
            id: document.id.or_else(|| Some(Uuid::new_v4())),
            ..document.clone()
        };
        *self.document.lock().await = Some(stored.clone());
        Ok(stored)
    }
}

/* ---------------- editor harness ---------------- */

/// Project store, media storage and a mounted project list wired together the
/// way the server wires them, backed by the in-memory adapters.
pub struct EditorHarness {
    pub store: InMemoryProjectStore,
    pub media: InMemoryMediaStorage,
    pub projects: Arc<ProjectsResource>,
}

impl EditorHarness {
    pub async fn new() -> Self {
        Self::with_projects(&[]).await
    }

    /// Seed one project per `(slug, order_index)` pair, then mount the list.
    pub async fn with_projects(seed: &[(&str, Option<i32>)]) -> Self {
        let store = InMemoryProjectStore::with_rows(
            seed.iter()
                .map(|(slug, order)| sample_project(slug, *order))
                .collect(),
        );
        let get_list = Arc::new(GetProjectsService::new(store.clone()));
        let projects = Arc::new(ProjectsResource::mount(get_list).await);

        Self {
            store,
            media: InMemoryMediaStorage::default(),
            projects,
        }
    }

    pub fn project_use_cases(&self) -> ProjectUseCases {
        ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(self.store.clone())),
            get_featured: Arc::new(GetFeaturedProjectsService::new(self.store.clone())),
            get_by_slug: Arc::new(GetProjectBySlugService::new(self.store.clone())),
            create: Arc::new(CreateProjectService::new(self.store.clone())),
            update: Arc::new(UpdateProjectService::new(self.store.clone())),
            delete: Arc::new(DeleteProjectService::new(self.store.clone())),
        }
    }

    pub fn media_use_cases(&self) -> MultimediaUseCases {
        let policy = UploadPolicy::default();
        MultimediaUseCases {
            upload: Arc::new(UploadMediaService::new(self.media.clone(), policy.clone())),
            delete: Arc::new(DeleteMediaService::new(self.media.clone())),
            upload_resume: Arc::new(UploadResumeFileService::new(
                self.media.clone(),
                policy.clone(),
                "resume.pdf",
            )),
            resume_url: Arc::new(GetResumeUrlService::new(self.media.clone(), "resume.pdf")),
            policy,
        }
    }

    pub fn editor(&self) -> ProjectEditor {
        ProjectEditor::new(
            Arc::clone(&self.projects),
            self.project_use_cases(),
            self.media_use_cases(),
        )
    }
}
