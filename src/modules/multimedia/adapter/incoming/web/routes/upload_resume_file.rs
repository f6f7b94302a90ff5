use actix_web::{post, web, HttpRequest, Responder};
use tracing::info;

use super::{content_type, upload_error_response, UploadFileQuery, UploadMediaResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the resume file
///
/// The previous file is removed first and the new one is stored under the
/// fixed resume object name.
#[utoipa::path(
    post,
    path = "/api/admin/resume/file",
    tag = "admin",
    params(UploadFileQuery),
    request_body(content = Vec<u8>, content_type = "application/pdf"),
    responses(
        (status = 201, description = "Resume replaced", body = inline(SuccessResponse<UploadMediaResponse>)),
        (status = 400, description = "Bad name or empty file", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 502, description = "Storage rejected the upload", body = ErrorResponse),
        (status = 503, description = "Content store not configured", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/resume/file")]
pub async fn upload_resume_file_handler(
    _admin: AdminSession,
    query: web::Query<UploadFileQuery>,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let file = UploadFile::new(
        query.into_inner().file_name,
        content_type(&req),
        body.to_vec(),
    );

    match data.media.upload_resume.execute(file).await {
        Ok(url) => {
            info!(%url, "resume file replaced");
            ApiResponse::created(UploadMediaResponse {
                url,
                bucket: Bucket::Resumes,
            })
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
    async fn test_resume_upload_uses_fixed_name() {
        let h = EditorHarness::new().await;
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_editor_harness(&h).build())
                .app_data(web::Data::new(create_test_token_provider()))
                .service(upload_resume_file_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/resume/file?file_name=cv-2026.pdf")
            .insert_header(admin_auth_header())
            .insert_header(("Content-Type", "application/pdf"))
            .set_payload(b"%PDF-1.7".to_vec())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["url"]
            .as_str()
            .unwrap()
            .ends_with("/resumes/resume.pdf"));
        assert_eq!(body["data"]["bucket"], "resumes");
    }

    #[actix_web::test]
    async fn test_resume_upload_requires_admin() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(create_test_token_provider()))
                .service(upload_resume_file_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/resume/file?file_name=cv.pdf")
            .set_payload(b"%PDF".to_vec())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
