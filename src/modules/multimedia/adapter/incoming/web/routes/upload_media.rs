// src/modules/multimedia/adapter/incoming/web/routes/upload_media.rs

use actix_web::{post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use super::{content_type, project_bucket, upload_error_response};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadFileQuery {
    /// Original file name; only its extension is kept.
    pub file_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadMediaResponse {
    pub url: String,
    pub bucket: Bucket,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Upload a project media file
///
/// The request body is the raw file; `Content-Type` is stored with it.
#[utoipa::path(
    post,
    path = "/api/admin/media/{bucket}",
    tag = "admin",
    params(
        ("bucket" = String, Path, description = "project-images, project-videos or project-documents"),
        UploadFileQuery,
    ),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Uploaded", body = inline(SuccessResponse<UploadMediaResponse>)),
        (status = 400, description = "Unknown bucket, bad name or empty file", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Storage rejected the upload", body = ErrorResponse),
        (status = 503, description = "Content store not configured", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/media/{bucket}")]
pub async fn upload_media_handler(
    _admin: AdminSession,
    path: web::Path<String>,
    query: web::Query<UploadFileQuery>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let bucket = match project_bucket(&path) {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let file = UploadFile::new(
        query.into_inner().file_name,
        content_type(&req),
        body.to_vec(),
    );
    let size = file.size();

    match data.media.upload.execute(bucket, file).await {
        Ok(url) => {
            info!(%bucket, size, %url, "media uploaded");
            ApiResponse::created(UploadMediaResponse { url, bucket })
        }
        Err(e) => upload_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{
        admin_auth_header, create_test_token_provider,
    };
    use crate::tests::support::in_memory::EditorHarness;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_upload_returns_public_url() {
        let h = EditorHarness::new().await;
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_editor_harness(&h).build())
                .app_data(web::Data::new(create_test_token_provider()))
                .service(upload_media_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/media/project-images?file_name=Cover.JPG")
            .insert_header(admin_auth_header())
            .insert_header(("Content-Type", "image/jpeg"))
            .set_payload(vec![0xFF, 0xD8, 0xFF])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        let url = body["data"]["url"].as_str().unwrap();
        assert!(url.contains("/project-images/"));
        assert!(url.ends_with(".jpg"));
        assert_eq!(body["data"]["bucket"], "project-images");

        let stored = h.media.uploaded().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].content_type, "image/jpeg");
    }

    #[actix_web::test]
    async fn test_upload_rejects_unknown_and_resume_buckets() {
        let h = EditorHarness::new().await;
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_editor_harness(&h).build())
                .app_data(web::Data::new(create_test_token_provider()))
                .service(upload_media_handler),
        )
        .await;

        for bucket in ["avatars", "resumes"] {
            let req = test::TestRequest::post()
                .uri(&format!("/api/admin/media/{}?file_name=a.png", bucket))
                .insert_header(admin_auth_header())
                .set_payload(vec![1])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "INVALID_BUCKET");
        }
    }

    #[actix_web::test]
    async fn test_upload_empty_file_is_rejected() {
        let h = EditorHarness::new().await;
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_editor_harness(&h).build())
                .app_data(web::Data::new(create_test_token_provider()))
                .service(upload_media_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/media/project-videos?file_name=clip.mp4")
            .insert_header(admin_auth_header())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_FILE");
    }

    #[actix_web::test]
    async fn test_upload_when_backend_disabled() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(create_test_token_provider()))
                .service(upload_media_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/media/project-documents?file_name=deck.pdf")
            .insert_header(admin_auth_header())
            .set_payload(vec![1, 2, 3])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
