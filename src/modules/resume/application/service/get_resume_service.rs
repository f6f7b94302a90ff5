use async_trait::async_trait;
use tracing::error;

use crate::modules::resume::application::domain::ResumeDocument;
use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, LoadResumeError,
};
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::shared::backend::StoreError;

pub struct GetResumeService<S>
where
    S: ResumeStore,
{
    store: S,
}

impl<S> GetResumeService<S>
where
    S: ResumeStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetResumeUseCase for GetResumeService<S>
where
    S: ResumeStore + Send + Sync,
{
    async fn execute(&self) -> Option<ResumeDocument> {
        self.store.get_resume().await.unwrap_or_else(|e| {
            error!("Error fetching resume: {}", e);
            None
        })
    }

    async fn load_for_edit(&self) -> Result<Option<ResumeDocument>, LoadResumeError> {
        self.store.get_resume().await.map_err(|e| match e {
            StoreError::Disabled => LoadResumeError::BackendDisabled,
            other => {
                error!("Error loading resume for edit: {}", other);
                LoadResumeError::RepositoryError(other.to_string())
            }
        })
    }
}
