use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::{NewProject, Project};
use crate::modules::project::application::ports::outgoing::{
    ProjectChanges, ProjectQuery, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::backend::{Query, RestClient, StoreError};

const TABLE: &str = "projects";

/// `projects` table over the hosted REST API. Serves both the read and the
/// write port.
#[derive(Clone)]
pub struct ProjectStoreRemote {
    client: RestClient,
}

impl ProjectStoreRemote {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        let rows: Vec<Project> = self
            .client
            .select(TABLE, &Query::new().eq("id", id).limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }
}

fn first_row(rows: Vec<Project>, op: &str) -> Result<Project, StoreError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| StoreError::Decode(format!("{} returned no rows", op)))
}

#[async_trait]
impl ProjectQuery for ProjectStoreRemote {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.client
            .select(TABLE, &Query::new().order_asc_nulls_last("order_index"))
            .await
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.client
            .select(
                TABLE,
                &Query::new()
                    .eq("is_featured", true)
                    .order_asc_nulls_last("order_index"),
            )
            .await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        let rows: Vec<Project> = self
            .client
            .select(TABLE, &Query::new().eq("slug", slug).limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl ProjectRepository for ProjectStoreRemote {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        let rows: Vec<Project> = self.client.insert(TABLE, &data).await?;
        Ok(first_row(rows, "insert projects")?)
    }

    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError> {
        // An empty PATCH body is rejected by the API, so read the row instead.
        if changes.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or(ProjectRepositoryError::NotFound);
        }

        let rows: Vec<Project> = self
            .client
            .update(TABLE, &Query::new().eq("id", id), &changes)
            .await?;

        rows.into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        self.client
            .delete(TABLE, &Query::new().eq("id", id))
            .await?;
        Ok(())
    }
}
