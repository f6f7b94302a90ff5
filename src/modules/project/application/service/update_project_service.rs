use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectChanges, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::backend::StoreError;

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, UpdateProjectError> {
        self.repo
            .update_project(project_id, changes)
            .await
            .map_err(|e| {
                error!("Error updating project {}: {}", project_id, e);
                match e {
                    ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                    ProjectRepositoryError::SlugAlreadyExists => {
                        UpdateProjectError::SlugAlreadyExists
                    }
                    ProjectRepositoryError::Store(StoreError::Disabled) => {
                        UpdateProjectError::BackendDisabled
                    }
                    ProjectRepositoryError::Store(other) => {
                        UpdateProjectError::RepositoryError(other.to_string())
                    }
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::NewProject;
    use crate::modules::project::application::ports::outgoing::PatchField;
    use crate::tests::support::project_test_fixtures::sample_project;
    use std::sync::Mutex;

    struct MockProjectRepo {
        result: Result<Project, ProjectRepositoryError>,
        seen: Mutex<Option<ProjectChanges>>,
    }

    impl MockProjectRepo {
        fn new(result: Result<Project, ProjectRepositoryError>) -> Self {
            Self {
                result,
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepo {
        async fn create_project(
            &self,
            _data: NewProject,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!("not needed for update_project tests")
        }

        async fn update_project(
            &self,
            _id: Uuid,
            changes: ProjectChanges,
        ) -> Result<Project, ProjectRepositoryError> {
            *self.seen.lock().unwrap() = Some(changes);
            self.result.clone()
        }

        async fn delete_project(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
            unimplemented!("not needed for update_project tests")
        }
    }

    #[tokio::test]
    async fn test_execute_forwards_changes() {
        let service = UpdateProjectService::new(MockProjectRepo::new(Ok(sample_project(
            "renamed", None,
        ))));

        let changes = ProjectChanges {
            title: Some("Renamed".to_string()),
            thumbnail_url: PatchField::Null,
            ..Default::default()
        };

        let res = service.execute(Uuid::new_v4(), changes.clone()).await;

        assert_eq!(res.unwrap().slug, "renamed");
        assert_eq!(service.repo.seen.lock().unwrap().clone(), Some(changes));
    }

    #[tokio::test]
    async fn test_execute_maps_not_found() {
        let service =
            UpdateProjectService::new(MockProjectRepo::new(Err(ProjectRepositoryError::NotFound)));

        let res = service
            .execute(Uuid::new_v4(), ProjectChanges::default())
            .await;

        assert_eq!(res.unwrap_err(), UpdateProjectError::NotFound);
    }

    #[tokio::test]
    async fn test_execute_maps_disabled() {
        let service = UpdateProjectService::new(MockProjectRepo::new(Err(
            ProjectRepositoryError::Store(StoreError::Disabled),
        )));

        let res = service
            .execute(Uuid::new_v4(), ProjectChanges::default())
            .await;

        assert_eq!(res.unwrap_err(), UpdateProjectError::BackendDisabled);
    }
}
