use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactSubmission;
use crate::shared::backend::StoreError;

/// Write-only sink for contact form entries.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError>;
}
