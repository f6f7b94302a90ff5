use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Content store is not configured")]
    BackendDisabled,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError>;
}
