use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

use crate::modules::resume::application::domain::ResumeDocument;
use crate::modules::resume::application::ports::incoming::use_cases::{
    SaveResumeError, SaveResumeUseCase,
};
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::shared::backend::StoreError;

/// Keeps a single row: a document without an id takes over the id of the
/// stored record, if there is one. When that lookup fails nothing is written.
pub struct SaveResumeService<S>
where
    S: ResumeStore,
{
    store: S,
}

impl<S> SaveResumeService<S>
where
    S: ResumeStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

fn map_store_error(e: StoreError) -> SaveResumeError {
    match e {
        StoreError::Disabled => SaveResumeError::BackendDisabled,
        other => SaveResumeError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<S> SaveResumeUseCase for SaveResumeService<S>
where
    S: ResumeStore + Send + Sync,
{
    async fn execute(&self, mut document: ResumeDocument) -> Result<ResumeDocument, SaveResumeError> {
        if document.id.is_none() {
            let existing = self.store.get_resume().await.map_err(|e| {
                error!("Could not look up existing resume id: {}", e);
                map_store_error(e)
            })?;
            document.id = existing.and_then(|d| d.id);
        }

        document.updated_at = Some(Utc::now());

        let saved = self.store.upsert_resume(&document).await.map_err(|e| {
            error!("Error saving resume: {}", e);
            map_store_error(e)
        })?;

        info!(id = ?saved.id, "Resume saved");
        Ok(saved)
    }
}
