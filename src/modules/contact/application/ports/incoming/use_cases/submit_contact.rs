use async_trait::async_trait;
use thiserror::Error;

use crate::modules::contact::application::domain::ContactSubmission;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitContactError {
    #[error("Failed to store contact submission: {0}")]
    StoreFailed(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SubmitContactError>;
}
