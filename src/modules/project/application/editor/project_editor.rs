// src/modules/project/application/editor/project_editor.rs
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::project_form::{ProjectForm, ProjectFormError};
use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::modules::multimedia::application::media_use_cases::MultimediaUseCases;
use crate::modules::multimedia::application::ports::incoming::use_cases::UploadMediaError;
use crate::modules::project::application::domain::{derive_slug, Project};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, DeleteProjectError, UpdateProjectError,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::projects_resource::ProjectsResource;

//
// ──────────────────────────────────────────────────────────
// Intent, slots, draft
// ──────────────────────────────────────────────────────────
//

/// What the admin asked to open, read from `?new=true` / `?edit=<id>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct EditorIntent {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub edit: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MediaSlot {
    Thumbnail,
    Video,
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown media slot: {0}")]
pub struct UnknownMediaSlot(pub String);

impl FromStr for MediaSlot {
    type Err = UnknownMediaSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumbnail" => Ok(MediaSlot::Thumbnail),
            "video" => Ok(MediaSlot::Video),
            "pdf" => Ok(MediaSlot::Pdf),
            other => Err(UnknownMediaSlot(other.to_string())),
        }
    }
}

impl MediaSlot {
    pub fn bucket(self) -> Bucket {
        match self {
            MediaSlot::Thumbnail => Bucket::ProjectImages,
            MediaSlot::Video => Bucket::ProjectVideos,
            MediaSlot::Pdf => Bucket::ProjectDocuments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EditorDraft {
    /// `None` while creating a new project.
    pub editing: Option<Uuid>,
    pub form: ProjectForm,
}

impl EditorDraft {
    pub fn is_creating(&self) -> bool {
        self.editing.is_none()
    }

    fn field_mut(&mut self, slot: MediaSlot) -> &mut String {
        match slot {
            MediaSlot::Thumbnail => &mut self.form.thumbnail_url,
            MediaSlot::Video => &mut self.form.video_url,
            MediaSlot::Pdf => &mut self.form.pdf_url,
        }
    }

    /// Currently bound media URL for the slot, if any.
    pub fn preview(&self, slot: MediaSlot) -> Option<&str> {
        let value = match slot {
            MediaSlot::Thumbnail => &self.form.thumbnail_url,
            MediaSlot::Video => &self.form.video_url,
            MediaSlot::Pdf => &self.form.pdf_url,
        };
        Some(value.as_str()).filter(|v| !v.is_empty())
    }
}

/// One change to a draft held by the client between requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditorAction {
    SetTitle { title: String },
    SetSlug { slug: String },
    RemoveMedia { slot: MediaSlot },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitProjectError {
    #[error("No project is open in the editor")]
    NotOpen,

    #[error(transparent)]
    Invalid(#[from] ProjectFormError),

    #[error(transparent)]
    Create(#[from] CreateProjectError),

    #[error(transparent)]
    Update(#[from] UpdateProjectError),
}

//
// ──────────────────────────────────────────────────────────
// Editor
// ──────────────────────────────────────────────────────────
//

/// Admin project editor: one draft at a time, submitted through the project
/// use cases, with the shared project list refetched after every write.
pub struct ProjectEditor {
    projects: Arc<ProjectsResource>,
    use_cases: ProjectUseCases,
    media: MultimediaUseCases,
    draft: Option<EditorDraft>,
}

impl ProjectEditor {
    pub fn new(
        projects: Arc<ProjectsResource>,
        use_cases: ProjectUseCases,
        media: MultimediaUseCases,
    ) -> Self {
        Self {
            projects,
            use_cases,
            media,
            draft: None,
        }
    }

    pub fn draft(&self) -> Option<&EditorDraft> {
        self.draft.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn open_new(&mut self) {
        self.draft = Some(EditorDraft {
            editing: None,
            form: ProjectForm::default(),
        });
    }

    pub fn open_existing(&mut self, project: &Project) {
        self.draft = Some(EditorDraft {
            editing: Some(project.id),
            form: ProjectForm::from_project(project),
        });
    }

    /// `new` opens a blank draft; a known `edit` id then replaces it. Unknown
    /// ids are ignored. Returns whether a draft is open afterwards.
    pub async fn open_from_intent(&mut self, intent: &EditorIntent) -> bool {
        if intent.new {
            self.open_new();
        }
        if let Some(id) = intent.edit {
            let listed = self.projects.data().await;
            match listed.iter().find(|p| p.id == id) {
                Some(project) => self.open_existing(project),
                None => warn!(%id, "edit requested for a project not in the list"),
            }
        }
        self.is_open()
    }

    /// Continue a draft the client sent back.
    pub fn restore(&mut self, draft: EditorDraft) {
        self.draft = Some(draft);
    }

    pub fn close(&mut self) {
        self.draft = None;
    }

    pub async fn apply_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::SetTitle { title } => self.set_title(&title),
            EditorAction::SetSlug { slug } => self.set_slug(&slug),
            EditorAction::RemoveMedia { slot } => {
                self.remove_media(slot).await;
            }
        }
    }

    /// Set the title; while creating, a non-empty title also re-derives the slug.
    pub fn set_title(&mut self, title: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.form.title = title.to_string();
            if draft.is_creating() && !title.is_empty() {
                draft.form.slug = derive_slug(title);
            }
        }
    }

    pub fn set_slug(&mut self, slug: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.form.slug = slug.to_string();
        }
    }

    /// Replace the whole form, as a client submitting every field at once.
    /// A new project sent without a slug gets one from its title.
    pub fn apply_form(&mut self, form: ProjectForm) {
        if let Some(draft) = self.draft.as_mut() {
            let derive = draft.is_creating() && form.slug.is_empty();
            draft.form = form;
            if derive && !draft.form.title.is_empty() {
                draft.form.slug = derive_slug(&draft.form.title);
            }
        }
    }

    /// Upload into the slot's bucket and bind the URL to the draft.
    pub async fn upload_media(
        &mut self,
        slot: MediaSlot,
        file: UploadFile,
    ) -> Result<String, UploadMediaError> {
        let url = self.media.upload.execute(slot.bucket(), file).await?;
        if let Some(draft) = self.draft.as_mut() {
            *draft.field_mut(slot) = url.clone();
        }
        Ok(url)
    }

    /// Delete the slot's current object and clear the field. A no-op when the
    /// slot is empty. The field is cleared even if storage removal failed.
    pub async fn remove_media(&mut self, slot: MediaSlot) -> bool {
        let Some(url) = self
            .draft
            .as_ref()
            .and_then(|d| d.preview(slot))
            .map(str::to_string)
        else {
            return false;
        };

        if !self.media.delete.execute(&url, slot.bucket()).await {
            warn!(%url, ?slot, "media removal failed, clearing field anyway");
        }
        if let Some(draft) = self.draft.as_mut() {
            draft.field_mut(slot).clear();
        }
        true
    }

    /// Create or update from the draft, refetch the list and close.
    /// On failure the draft stays open so nothing typed is lost.
    pub async fn submit(&mut self) -> Result<Project, SubmitProjectError> {
        let draft = self.draft.as_ref().ok_or(SubmitProjectError::NotOpen)?;
        draft.form.validate()?;

        let saved = match draft.editing {
            Some(id) => {
                self.use_cases
                    .update
                    .execute(id, draft.form.clone().into_changes())
                    .await?
            }
            None => {
                let order_index = self.projects.count().await as i32 + 1;
                self.use_cases
                    .create
                    .execute(draft.form.clone().into_new_project(order_index))
                    .await?
            }
        };

        info!(id = %saved.id, slug = %saved.slug, "project saved");
        self.projects.refetch().await;
        self.close();
        Ok(saved)
    }

    pub async fn delete_project(&self, id: Uuid) -> Result<(), DeleteProjectError> {
        self.use_cases.delete.execute(id).await.map_err(|e| {
            error!(%id, error = %e, "project delete failed");
            e
        })?;
        self.projects.refetch().await;
        Ok(())
    }
}
