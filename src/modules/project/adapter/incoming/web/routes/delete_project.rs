use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::editor_for;
use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
///
/// Removes the row and reloads the shared list. Media files stay in storage.
#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 503, description = "Content store not configured", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let editor = editor_for(&data);

    match editor.delete_project(id).await {
        Ok(()) => {
            info!(%id, admin = %admin.subject, "project deleted");
            ApiResponse::no_content()
        }
        Err(DeleteProjectError::BackendDisabled) => ApiResponse::backend_disabled(),
        Err(DeleteProjectError::RepositoryError(e)) => {
            error!(%id, error = %e, "failed to delete project");
            ApiResponse::internal_error()
        }
    }
}
