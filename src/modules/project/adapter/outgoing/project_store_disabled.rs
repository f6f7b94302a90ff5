use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::{NewProject, Project};
use crate::modules::project::application::ports::outgoing::{
    ProjectChanges, ProjectQuery, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::backend::StoreError;

/// Used when no content store is configured: nothing to read, nowhere to write.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectStoreDisabled;

#[async_trait]
impl ProjectQuery for ProjectStoreDisabled {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(Vec::new())
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Project>, StoreError> {
        Ok(None)
    }
}

#[async_trait]
impl ProjectRepository for ProjectStoreDisabled {
    async fn create_project(&self, _data: NewProject) -> Result<Project, ProjectRepositoryError> {
        Err(StoreError::Disabled.into())
    }

    async fn update_project(
        &self,
        _id: Uuid,
        _changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError> {
        Err(StoreError::Disabled.into())
    }

    async fn delete_project(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
        Err(StoreError::Disabled.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::project_test_fixtures::sample_new_project;

    #[tokio::test]
    async fn test_reads_are_empty() {
        let store = ProjectStoreDisabled;

        assert!(store.list_projects().await.unwrap().is_empty());
        assert!(store.list_featured_projects().await.unwrap().is_empty());
        assert_eq!(store.find_by_slug("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_writes_report_disabled() {
        let store = ProjectStoreDisabled;

        let err = store
            .create_project(sample_new_project("Title"))
            .await
            .unwrap_err();
        assert_eq!(err, ProjectRepositoryError::Store(StoreError::Disabled));

        let err = store.delete_project(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err, ProjectRepositoryError::Store(StoreError::Disabled));
    }
}
