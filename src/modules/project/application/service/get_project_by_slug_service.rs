use async_trait::async_trait;
use tracing::error;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectBySlugUseCase;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

#[derive(Clone)]
pub struct GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectBySlugUseCase for GetProjectBySlugService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Option<Project> {
        match self.query.find_by_slug(slug).await {
            Ok(project) => project,
            Err(e) => {
                error!("Error fetching project slug={}: {}", slug, e);
                None
            }
        }
    }
}
