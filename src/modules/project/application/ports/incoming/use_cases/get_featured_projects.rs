use async_trait::async_trait;

use crate::modules::project::application::domain::Project;

/// Projects flagged `is_featured`, in display order. Failures read as empty.
#[async_trait]
pub trait GetFeaturedProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Project>;
}
