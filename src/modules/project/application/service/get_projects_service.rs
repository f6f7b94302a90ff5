use async_trait::async_trait;
use tracing::error;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

#[derive(Clone)]
pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Project> {
        match self.query.list_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                error!("Error fetching projects: {}", e);
                Vec::new()
            }
        }
    }
}
