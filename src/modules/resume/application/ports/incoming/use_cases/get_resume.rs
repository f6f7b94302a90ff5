use async_trait::async_trait;
use std::fmt;

use crate::modules::resume::application::domain::ResumeDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResumeError {
    BackendDisabled,
    RepositoryError(String),
}

impl fmt::Display for LoadResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadResumeError::BackendDisabled => write!(f, "content store is not configured"),
            LoadResumeError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

impl std::error::Error for LoadResumeError {}

#[async_trait]
pub trait GetResumeUseCase: Send + Sync {
    /// `None` when no record exists or it could not be read.
    async fn execute(&self) -> Option<ResumeDocument>;

    /// Read for a whole-document edit: a failed read is an error, never an
    /// empty record, so a later save cannot overwrite data it never saw.
    async fn load_for_edit(&self) -> Result<Option<ResumeDocument>, LoadResumeError>;
}
