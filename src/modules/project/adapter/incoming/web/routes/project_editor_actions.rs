use actix_web::{post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::{editor_for, open_editor};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::multimedia::adapter::incoming::web::routes::{
    content_type, upload_error_response,
};
use crate::modules::multimedia::application::domain::UploadFile;
use crate::modules::project::application::editor::{
    EditorAction, EditorDraft, EditorIntent, MediaSlot, ProjectForm,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct EditorMediaQuery {
    /// Original file name; only its extension is kept.
    pub file_name: String,
    /// Project being edited; absent while creating.
    #[serde(default)]
    pub edit: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EditorMediaResponse {
    pub slot: MediaSlot,
    pub url: String,
    /// The draft with `url` bound to the slot.
    pub draft: Option<EditorDraft>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EditorActionRequest {
    #[serde(default)]
    pub editing: Option<Uuid>,
    pub form: ProjectForm,
    pub action: EditorAction,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Upload a file into an editor media slot
///
/// The file goes to the slot's bucket and its public URL is bound to the
/// draft, which is returned for preview. The request body is the raw file.
#[utoipa::path(
    post,
    path = "/api/admin/projects/editor/media/{slot}",
    tag = "admin",
    params(
        ("slot" = String, Path, description = "thumbnail, video or pdf"),
        EditorMediaQuery,
    ),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Uploaded and bound", body = inline(SuccessResponse<EditorMediaResponse>)),
        (status = 400, description = "Unknown slot, bad name or empty file", body = ErrorResponse),
        (status = 404, description = "Edited project does not exist", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Storage rejected the upload", body = ErrorResponse),
        (status = 503, description = "Content store not configured", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/projects/editor/media/{slot}")]
pub async fn upload_editor_media_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    query: web::Query<EditorMediaQuery>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let slot = match path.parse::<MediaSlot>() {
        Ok(slot) => slot,
        Err(e) => return ApiResponse::bad_request("INVALID_SLOT", &e.to_string()),
    };
    let EditorMediaQuery { file_name, edit } = query.into_inner();

    let mut editor = editor_for(&data);
    let intent = EditorIntent {
        new: edit.is_none(),
        edit,
    };
    if let Err(resp) = open_editor(&mut editor, &intent, &data).await {
        return resp;
    }

    let file = UploadFile::new(file_name, content_type(&req), body.to_vec());
    match editor.upload_media(slot, file).await {
        Ok(url) => {
            info!(?slot, %url, "editor media uploaded");
            ApiResponse::created(EditorMediaResponse {
                slot,
                url,
                draft: editor.draft().cloned(),
            })
        }
        Err(e) => upload_error_response(e),
    }
}

/// Apply one change to a draft
///
/// The client sends its draft with a title, slug or media-removal action and
/// gets the updated draft back. While creating, a new title re-derives the
/// slug. Removing media deletes the stored object, then clears the field.
#[utoipa::path(
    post,
    path = "/api/admin/projects/editor/draft",
    tag = "admin",
    request_body = EditorActionRequest,
    responses(
        (status = 200, description = "Updated draft", body = inline(SuccessResponse<EditorDraft>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/projects/editor/draft")]
pub async fn apply_editor_action_handler(
    _admin: AdminSession,
    req: web::Json<EditorActionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let EditorActionRequest {
        editing,
        form,
        action,
    } = req.into_inner();

    let mut editor = editor_for(&data);
    editor.restore(EditorDraft { editing, form });
    editor.apply_action(action).await;

    match editor.draft() {
        Some(draft) => ApiResponse::success(draft.clone()),
        None => ApiResponse::internal_error(),
    }
}
