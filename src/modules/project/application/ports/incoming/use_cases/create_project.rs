use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::domain::{NewProject, Project};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateProjectError {
    SlugAlreadyExists,
    BackendDisabled,
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::SlugAlreadyExists => write!(f, "slug already exists"),
            CreateProjectError::BackendDisabled => write!(f, "content store is not configured"),
            CreateProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CreateProjectError {}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: NewProject) -> Result<Project, CreateProjectError>;
}
