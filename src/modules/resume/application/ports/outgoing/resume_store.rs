use async_trait::async_trait;

use crate::modules::resume::application::domain::ResumeDocument;
use crate::shared::backend::StoreError;

/// The `resume_data` table holds at most one meaningful row.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn get_resume(&self) -> Result<Option<ResumeDocument>, StoreError>;

    /// Insert, or replace the row with the same id.
    async fn upsert_resume(&self, document: &ResumeDocument) -> Result<ResumeDocument, StoreError>;
}
