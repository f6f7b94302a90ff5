use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::outgoing::ProjectChanges;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Project slug already exists")]
    SlugAlreadyExists,

    #[error("Content store is not configured")]
    BackendDisabled,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, UpdateProjectError>;
}
