use async_trait::async_trait;
use tracing::error;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetFeaturedProjectsUseCase;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

#[derive(Clone)]
pub struct GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFeaturedProjectsUseCase for GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Project> {
        self.query
            .list_featured_projects()
            .await
            .unwrap_or_else(|e| {
                error!("Error fetching featured projects: {}", e);
                Vec::new()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::backend::StoreError;
    use crate::tests::support::project_test_fixtures::sample_project;

    struct MockProjectQuery {
        result: Result<Vec<Project>, StoreError>,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
            unimplemented!()
        }

        async fn list_featured_projects(&self) -> Result<Vec<Project>, StoreError> {
            self.result.clone()
        }

        async fn find_by_slug(&self, _slug: &str) -> Result<Option<Project>, StoreError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_execute_passes_featured_rows_through() {
        let mut featured = sample_project("hero", Some(1));
        featured.is_featured = true;

        let service = GetFeaturedProjectsService::new(MockProjectQuery {
            result: Ok(vec![featured]),
        });

        let projects = service.execute().await;
        assert_eq!(projects.len(), 1);
        assert!(projects[0].is_featured);
    }

    #[tokio::test]
    async fn test_execute_error_reads_empty() {
        let service = GetFeaturedProjectsService::new(MockProjectQuery {
            result: Err(StoreError::Status {
                status: 500,
                message: "boom".to_string(),
            }),
        });

        assert!(service.execute().await.is_empty());
    }
}
