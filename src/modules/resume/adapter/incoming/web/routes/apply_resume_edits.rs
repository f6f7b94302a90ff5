use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::warn;
use utoipa::ToSchema;

use super::{load_error_response, save_error_response};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::resume::application::domain::ResumeDocument;
use crate::modules::resume::application::editor::{ResumeEdit, ResumeEditor};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResumeEditsRequest {
    pub edits: Vec<ResumeEdit>,
}

/// Apply a batch of edits to the resume and save it
///
/// The stored record (or an empty document) is loaded, every edit is applied
/// in order, and the result is saved in one upsert. If the record cannot be
/// read or any edit fails, nothing is saved.
#[utoipa::path(
    post,
    path = "/api/admin/resume/edits",
    tag = "admin",
    request_body = ResumeEditsRequest,
    responses(
        (status = 200, description = "Saved document", body = inline(SuccessResponse<ResumeDocument>)),
        (status = 400, description = "An edit addressed a missing entry", body = ErrorResponse),
        (status = 502, description = "Content store failed the read or the save", body = ErrorResponse),
        (status = 503, description = "Content store not configured", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/resume/edits")]
pub async fn apply_resume_edits_handler(
    _admin: AdminSession,
    req: web::Json<ResumeEditsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut editor = match ResumeEditor::load(data.resume.get.as_ref()).await {
        Ok(editor) => editor,
        Err(e) => {
            warn!(error = %e, "resume edits aborted, stored record unreadable");
            return load_error_response(e);
        }
    };

    if let Err(e) = editor.apply_all(req.into_inner().edits) {
        warn!(error = %e, "resume edit rejected");
        return ApiResponse::bad_request("INVALID_EDIT", &e.to_string());
    }

    match editor.save(data.resume.save.as_ref()).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(e) => save_error_response(e),
    }
}
