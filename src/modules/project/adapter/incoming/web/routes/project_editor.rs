use actix_web::{get, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{editor_for, open_editor};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::domain::{Project, SUGGESTED_CATEGORIES};
use crate::modules::project::application::editor::{
    EditorDraft, EditorIntent, ProjectForm, SubmitProjectError,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, UpdateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct EditorView {
    pub open: bool,
    pub draft: Option<EditorDraft>,
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitProjectRequest {
    /// Id of the project being edited; absent when creating.
    #[serde(default)]
    pub editing: Option<Uuid>,
    pub form: ProjectForm,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Open the project editor
///
/// `?new=true` opens a blank draft; `?edit=<id>` opens a listed project and
/// takes precedence. An unknown id reloads the list once, then answers 404.
#[utoipa::path(
    get,
    path = "/api/admin/projects/editor",
    tag = "admin",
    params(
        ("new" = Option<bool>, Query, description = "Open a blank draft"),
        ("edit" = Option<Uuid>, Query, description = "Open an existing project"),
    ),
    responses(
        (status = 200, description = "Editor state", body = inline(SuccessResponse<EditorView>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Edited project does not exist", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/projects/editor")]
pub async fn get_project_editor_handler(
    _admin: AdminSession,
    intent: web::Query<EditorIntent>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut editor = editor_for(&data);
    let open = match open_editor(&mut editor, &intent, &data).await {
        Ok(open) => open,
        Err(resp) => return resp,
    };

    ApiResponse::success(EditorView {
        open,
        draft: editor.draft().cloned(),
        categories: SUGGESTED_CATEGORIES.iter().map(|c| c.to_string()).collect(),
    })
}

/// Submit the project editor
///
/// Creates a project (201) or updates the one named by `editing` (200), then
/// reloads the shared list.
#[utoipa::path(
    post,
    path = "/api/admin/projects/editor",
    tag = "admin",
    request_body = SubmitProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<Project>)),
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Missing title, slug or category", body = ErrorResponse),
        (status = 404, description = "Edited project does not exist", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
        (status = 503, description = "Content store not configured", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/projects/editor")]
pub async fn submit_project_editor_handler(
    admin: AdminSession,
    req: web::Json<SubmitProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let mut editor = editor_for(&data);

    match req.editing {
        Some(id) => {
            let intent = EditorIntent {
                new: false,
                edit: Some(id),
            };
            if let Err(resp) = open_editor(&mut editor, &intent, &data).await {
                return resp;
            }
        }
        None => editor.open_new(),
    }

    editor.apply_form(req.form);
    let creating = req.editing.is_none();

    match editor.submit().await {
        Ok(project) if creating => {
            info!(id = %project.id, admin = %admin.subject, "project created");
            ApiResponse::created(project)
        }
        Ok(project) => {
            info!(id = %project.id, admin = %admin.subject, "project updated");
            ApiResponse::success(project)
        }
        Err(e) => submit_error_response(e),
    }
}

fn submit_error_response(err: SubmitProjectError) -> actix_web::HttpResponse {
    match err {
        SubmitProjectError::Invalid(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),

        SubmitProjectError::Create(CreateProjectError::SlugAlreadyExists)
        | SubmitProjectError::Update(UpdateProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Project slug already exists")
        }

        SubmitProjectError::Update(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        SubmitProjectError::Create(CreateProjectError::BackendDisabled)
        | SubmitProjectError::Update(UpdateProjectError::BackendDisabled) => {
            warn!("project submit rejected: content store not configured");
            ApiResponse::backend_disabled()
        }

        SubmitProjectError::Create(CreateProjectError::RepositoryError(e))
        | SubmitProjectError::Update(UpdateProjectError::RepositoryError(e)) => {
            error!(error = %e, "project submit failed");
            ApiResponse::internal_error()
        }

        SubmitProjectError::NotOpen => {
            error!("project submit without an open draft");
            ApiResponse::internal_error()
        }
    }
}
