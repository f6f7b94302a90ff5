use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project by slug
///
/// Read-only: views are counted through `POST /api/analytics/project-view/{id}`.
#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = "projects",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<Project>)),
        (
            status = 404,
            description = "No project with this slug",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PROJECT_NOT_FOUND", "message": "Project not found" }
            })
        ),
    )
)]
#[get("/api/projects/{slug}")]
pub async fn get_project_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.get_by_slug.execute(&slug).await {
        Some(project) => ApiResponse::success(project),
        None => {
            debug!(%slug, "project not found");
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
