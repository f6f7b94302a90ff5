// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::project::application::domain::{CaseStudy, NewProject, Project};
use crate::shared::backend::StoreError;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear a nullable column
// - Value(v): replace with v
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    /// `None` clears, `Some(v)` sets.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }

    fn apply(self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Partial update of a project. Unset fields are not sent to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub thumbnail_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub video_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub pdf_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub case_study: PatchField<CaseStudy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub order_index: PatchField<i32>,
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        self == &ProjectChanges::default()
    }

    /// Apply to an in-memory row the same way the store applies the PATCH.
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(slug) = self.slug {
            project.slug = slug;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        self.thumbnail_url.apply(&mut project.thumbnail_url);
        self.video_url.apply(&mut project.video_url);
        self.pdf_url.apply(&mut project.pdf_url);
        self.description.apply(&mut project.description);
        self.case_study.apply(&mut project.case_study);
        if let Some(is_featured) = self.is_featured {
            project.is_featured = is_featured;
        }
        self.order_index.apply(&mut project.order_index);
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRepositoryError {
    NotFound,
    SlugAlreadyExists,
    Store(StoreError),
}

impl std::fmt::Display for ProjectRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectRepositoryError::NotFound => write!(f, "project not found"),
            ProjectRepositoryError::SlugAlreadyExists => write!(f, "slug already exists"),
            ProjectRepositoryError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl From<StoreError> for ProjectRepositoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => ProjectRepositoryError::SlugAlreadyExists,
            other => ProjectRepositoryError::Store(other),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError>;

    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError>;

    /// Removes the row only. Media referenced by the project stays in storage.
    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
