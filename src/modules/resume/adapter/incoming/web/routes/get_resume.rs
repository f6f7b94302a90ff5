use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::resume::application::domain::ResumeDocument;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public resume document
#[utoipa::path(
    get,
    path = "/api/resume",
    tag = "resume",
    responses(
        (status = 200, description = "Resume record", body = inline(SuccessResponse<ResumeDocument>)),
        (status = 404, description = "No resume saved yet", body = ErrorResponse),
    )
)]
#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume.get.execute().await {
        Some(document) => ApiResponse::success(document),
        None => ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found"),
    }
}
