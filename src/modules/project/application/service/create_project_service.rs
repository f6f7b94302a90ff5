use async_trait::async_trait;
use tracing::error;

use crate::modules::project::application::domain::{NewProject, Project};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::backend::StoreError;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: NewProject) -> Result<Project, CreateProjectError> {
        self.project_repository
            .create_project(data)
            .await
            .map_err(|e| {
                error!("Error creating project: {}", e);
                match e {
                    ProjectRepositoryError::SlugAlreadyExists => {
                        CreateProjectError::SlugAlreadyExists
                    }
                    ProjectRepositoryError::Store(StoreError::Disabled) => {
                        CreateProjectError::BackendDisabled
                    }
                    ProjectRepositoryError::Store(other) => {
                        CreateProjectError::RepositoryError(other.to_string())
                    }
                    ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                        "unexpected not found while creating project".to_string(),
                    ),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::modules::project::application::ports::outgoing::ProjectChanges;
    use crate::tests::support::project_test_fixtures::{sample_new_project, sample_project};

    #[derive(Clone)]
    struct MockProjectRepo {
        result: Result<Project, ProjectRepositoryError>,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepo {
        async fn create_project(
            &self,
            _data: NewProject,
        ) -> Result<Project, ProjectRepositoryError> {
            self.result.clone()
        }

        async fn update_project(
            &self,
            _id: Uuid,
            _changes: ProjectChanges,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!("not needed for create_project tests")
        }

        async fn delete_project(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
            unimplemented!("not needed for create_project tests")
        }
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn test_execute_success() {
        let repo = MockProjectRepo {
            result: Ok(sample_project("my-project", Some(1))),
        };
        let service = CreateProjectService::new(repo);

        let res = service.execute(sample_new_project("My Project")).await;

        assert_eq!(res.unwrap().slug, "my-project");
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn test_execute_maps_slug_already_exists() {
        let service = CreateProjectService::new(MockProjectRepo {
            result: Err(ProjectRepositoryError::SlugAlreadyExists),
        });

        let res = service.execute(sample_new_project("Dup")).await;

        assert_eq!(res.unwrap_err(), CreateProjectError::SlugAlreadyExists);
    }

    #[tokio::test]
    async fn test_execute_maps_disabled_backend() {
        let service = CreateProjectService::new(MockProjectRepo {
            result: Err(ProjectRepositoryError::Store(StoreError::Disabled)),
        });

        let res = service.execute(sample_new_project("X")).await;

        assert_eq!(res.unwrap_err(), CreateProjectError::BackendDisabled);
    }

    #[tokio::test]
    async fn test_execute_maps_transport_error() {
        let service = CreateProjectService::new(MockProjectRepo {
            result: Err(ProjectRepositoryError::Store(StoreError::Transport(
                "down".to_string(),
            ))),
        });

        let res = service.execute(sample_new_project("X")).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateProjectError::RepositoryError(msg) if msg.contains("down")
        ));
    }
}
