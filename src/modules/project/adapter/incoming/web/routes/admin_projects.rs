use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::projects_resource::ProjectsSnapshot;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AdminProjectsQuery {
    /// Re-run the list read before answering.
    #[serde(default)]
    pub refetch: bool,
}

/// Admin project list
///
/// Current state of the shared project list, as the admin screens see it.
#[utoipa::path(
    get,
    path = "/api/admin/projects",
    tag = "admin",
    params(("refetch" = Option<bool>, Query, description = "Reload the list first")),
    responses(
        (status = 200, description = "Project list snapshot", body = inline(SuccessResponse<ProjectsSnapshot>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/projects")]
pub async fn get_admin_projects_handler(
    _admin: AdminSession,
    query: web::Query<AdminProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    if query.refetch {
        data.projects.refetch().await;
    }
    ApiResponse::success(data.projects.snapshot().await)
}
