use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::project::application::domain::{NewProject, Project};
use crate::modules::project::application::ports::outgoing::{PatchField, ProjectChanges};

/// Flat, string-valued editor form. Empty media strings mean "no media".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectForm {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub is_featured: bool,
    pub thumbnail_url: String,
    pub video_url: String,
    pub pdf_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProjectFormError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Slug is required")]
    MissingSlug,

    #[error("Category is required")]
    MissingCategory,
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            slug: project.slug.clone(),
            category: project.category.clone(),
            description: project.description.clone().unwrap_or_default(),
            is_featured: project.is_featured,
            thumbnail_url: project.thumbnail_url.clone().unwrap_or_default(),
            video_url: project.video_url.clone().unwrap_or_default(),
            pdf_url: project.pdf_url.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), ProjectFormError> {
        if self.title.trim().is_empty() {
            return Err(ProjectFormError::MissingTitle);
        }
        if self.slug.trim().is_empty() {
            return Err(ProjectFormError::MissingSlug);
        }
        if self.category.trim().is_empty() {
            return Err(ProjectFormError::MissingCategory);
        }
        Ok(())
    }

    /// New row: no case study yet, placed at `order_index`.
    pub fn into_new_project(self, order_index: i32) -> NewProject {
        NewProject {
            title: self.title,
            slug: self.slug,
            category: self.category,
            thumbnail_url: non_empty(self.thumbnail_url),
            video_url: non_empty(self.video_url),
            pdf_url: non_empty(self.pdf_url),
            description: Some(self.description),
            case_study: None,
            is_featured: self.is_featured,
            order_index: Some(order_index),
        }
    }

    /// Every form field is written; `case_study` and `order_index` are left alone.
    pub fn into_changes(self) -> ProjectChanges {
        ProjectChanges {
            title: Some(self.title),
            slug: Some(self.slug),
            category: Some(self.category),
            thumbnail_url: PatchField::from_option(non_empty(self.thumbnail_url)),
            video_url: PatchField::from_option(non_empty(self.video_url)),
            pdf_url: PatchField::from_option(non_empty(self.pdf_url)),
            description: PatchField::Value(self.description),
            case_study: PatchField::Unset,
            is_featured: Some(self.is_featured),
            order_index: PatchField::Unset,
        }
    }
}
