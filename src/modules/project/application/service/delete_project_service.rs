use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::backend::StoreError;

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError> {
        match self.repo.delete_project(project_id).await {
            Ok(()) => {
                info!("Deleted project {}", project_id);
                Ok(())
            }
            Err(ProjectRepositoryError::Store(StoreError::Disabled)) => {
                Err(DeleteProjectError::BackendDisabled)
            }
            Err(e) => {
                error!("Error deleting project {}: {}", project_id, e);
                Err(DeleteProjectError::RepositoryError(e.to_string()))
            }
        }
    }
}
