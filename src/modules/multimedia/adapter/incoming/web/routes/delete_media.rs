use actix_web::{delete, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::project_bucket;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteMediaRequest {
    /// Public URL previously returned by an upload.
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMediaResponse {
    pub deleted: bool,
}

/// Delete a project media file
///
/// The object name is the last path segment of `url`. Failures are reported
/// as `deleted: false` rather than as an error status.
#[utoipa::path(
    delete,
    path = "/api/admin/media/{bucket}",
    tag = "admin",
    params(("bucket" = String, Path, description = "Bucket the file lives in")),
    request_body = DeleteMediaRequest,
    responses(
        (status = 200, description = "Outcome of the removal", body = inline(SuccessResponse<DeleteMediaResponse>)),
        (status = 400, description = "Unknown bucket", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/media/{bucket}")]
pub async fn delete_media_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    req: web::Json<DeleteMediaRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bucket = match project_bucket(&path) {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let deleted = data.media.delete.execute(&req.url, bucket).await;
    info!(%bucket, url = %req.url, deleted, "media delete");

    ApiResponse::success(DeleteMediaResponse { deleted })
}
