use async_trait::async_trait;

use crate::modules::project::application::domain::Project;

/// `None` covers both "no such slug" and a failed read.
#[async_trait]
pub trait GetProjectBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Option<Project>;
}
