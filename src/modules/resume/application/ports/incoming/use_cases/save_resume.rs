use async_trait::async_trait;
use std::fmt;

use crate::modules::resume::application::domain::ResumeDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveResumeError {
    BackendDisabled,
    RepositoryError(String),
}

impl fmt::Display for SaveResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveResumeError::BackendDisabled => write!(f, "content store is not configured"),
            SaveResumeError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

impl std::error::Error for SaveResumeError {}

/// Upsert the whole document and return the stored version.
#[async_trait]
pub trait SaveResumeUseCase: Send + Sync {
    async fn execute(&self, document: ResumeDocument) -> Result<ResumeDocument, SaveResumeError>;
}
