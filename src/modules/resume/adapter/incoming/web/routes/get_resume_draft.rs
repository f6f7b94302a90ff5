use actix_web::{get, web, Responder};

use super::load_error_response;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::resume::application::domain::ResumeDocument;
use crate::modules::resume::application::editor::ResumeEditor;
use crate::modules::resume::application::ports::incoming::use_cases::LoadResumeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Resume editor draft
///
/// The stored record, or an empty document when none exists yet or no
/// content store is configured.
#[utoipa::path(
    get,
    path = "/api/admin/resume/draft",
    tag = "admin",
    responses(
        (status = 200, description = "Draft to edit", body = inline(SuccessResponse<ResumeDocument>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 502, description = "Stored record could not be read", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/resume/draft")]
pub async fn get_resume_draft_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match ResumeEditor::load(data.resume.get.as_ref()).await {
        Ok(editor) => ApiResponse::success(editor.into_draft()),
        Err(LoadResumeError::BackendDisabled) => {
            ApiResponse::success(ResumeEditor::default().into_draft())
        }
        Err(e) => load_error_response(e),
    }
}
