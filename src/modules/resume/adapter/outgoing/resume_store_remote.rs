use async_trait::async_trait;

use crate::modules::resume::application::domain::ResumeDocument;
use crate::modules::resume::application::ports::outgoing::ResumeStore;
use crate::shared::backend::{Query, RestClient, StoreError};

const TABLE: &str = "resume_data";

#[derive(Clone)]
pub struct ResumeStoreRemote {
    client: RestClient,
}

impl ResumeStoreRemote {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResumeStore for ResumeStoreRemote {
    async fn get_resume(&self) -> Result<Option<ResumeDocument>, StoreError> {
        let rows: Vec<ResumeDocument> = self
            .client
            .select(TABLE, &Query::new().select("*").limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn upsert_resume(&self, document: &ResumeDocument) -> Result<ResumeDocument, StoreError> {
        let rows: Vec<ResumeDocument> = self
            .client
            .upsert(TABLE, std::slice::from_ref(document))
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("upsert returned no rows".to_string()))
    }
}
