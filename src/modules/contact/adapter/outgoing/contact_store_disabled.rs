use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::ContactStore;
use crate::shared::backend::StoreError;

/// Without a content store the submission is only logged and reported as
/// delivered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactStoreDisabled;

#[async_trait]
impl ContactStore for ContactStoreDisabled {
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        info!(
            name = %submission.name(),
            email = %submission.email(),
            message = ?submission.message(),
            "Contact form submission (content store not configured)"
        );
        Ok(())
    }
}
