// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::Project;
use crate::shared::backend::StoreError;

/// Read side of the `projects` table.
///
/// Results come back in display order (`order_index` ascending, nulls last).
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    async fn list_featured_projects(&self) -> Result<Vec<Project>, StoreError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError>;
}
