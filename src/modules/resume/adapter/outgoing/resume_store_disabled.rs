use async_trait::async_trait;

use crate::modules::resume::application::domain::ResumeDocument;
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::shared::backend::StoreError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeStoreDisabled;

#[async_trait]
impl ResumeStore for ResumeStoreDisabled {
    async fn get_resume(&self) -> Result<Option<ResumeDocument>, StoreError> {
        Ok(None)
    }

    async fn upsert_resume(&self, _document: &ResumeDocument) -> Result<ResumeDocument, StoreError> {
        Err(StoreError::Disabled)
    }
}
