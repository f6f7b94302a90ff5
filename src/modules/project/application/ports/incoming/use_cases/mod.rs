mod create_project;
mod delete_project;
mod get_featured_projects;
mod get_project_by_slug;
mod get_projects;
mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_featured_projects::GetFeaturedProjectsUseCase;
pub use get_project_by_slug::GetProjectBySlugUseCase;
pub use get_projects::GetProjectsUseCase;
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
