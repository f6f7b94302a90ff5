use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::project::application::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects
///
/// All projects in display order. An unreachable or unconfigured content
/// store yields an empty list.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Projects in display order", body = inline(SuccessResponse<Vec<Project>>)),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    let projects = data.project.get_list.execute().await;
    ApiResponse::success(projects)
}
