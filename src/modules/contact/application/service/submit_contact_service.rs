use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::contact::application::domain::ContactSubmission;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactStore;

pub struct SubmitContactService<S>
where
    S: ContactStore,
{
    store: S,
}

impl<S> SubmitContactService<S>
where
    S: ContactStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> SubmitContactUseCase for SubmitContactService<S>
where
    S: ContactStore + Send + Sync,
{
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SubmitContactError> {
        self.store.insert_contact(&submission).await.map_err(|e| {
            error!("Error submitting contact form: {}", e);
            SubmitContactError::StoreFailed(e.to_string())
        })?;

        info!(email = %submission.email(), "Contact form submitted");
        Ok(())
    }
}
