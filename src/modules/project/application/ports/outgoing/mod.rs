pub mod project_query;
pub mod project_repository;

pub use project_query::ProjectQuery;
pub use project_repository::{PatchField, ProjectChanges, ProjectRepository, ProjectRepositoryError};
