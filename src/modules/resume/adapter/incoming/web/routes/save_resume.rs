use actix_web::{put, web, Responder};

use super::save_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::modules::resume::application::domain::ResumeDocument;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the whole resume document
#[utoipa::path(
    put,
    path = "/api/admin/resume",
    tag = "admin",
    request_body = ResumeDocument,
    responses(
        (status = 200, description = "Saved document", body = inline(SuccessResponse<ResumeDocument>)),
        (status = 502, description = "Content store rejected the save", body = ErrorResponse),
        (status = 503, description = "Content store not configured", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/admin/resume")]
pub async fn save_resume_handler(
    _admin: AdminSession,
    req: web::Json<ResumeDocument>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.save.execute(req.into_inner()).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(e) => save_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{
        admin_auth_header, create_test_token_provider,
    };
    use crate::tests::support::in_memory::InMemoryResumeStore;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_save_upserts_document() {
        let store = InMemoryResumeStore::default();
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_resume_store(store.clone()).build())
                .app_data(web::Data::new(create_test_token_provider()))
                .service(save_resume_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/resume")
            .insert_header(admin_auth_header())
            .set_json(json!({
                "summary": "Motion designer",
                "languages": [{ "name": "English", "proficiency": "Native" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"]["id"].is_string());
        assert!(body["data"]["updated_at"].is_string());

        let stored = store.document().await.unwrap();
        assert_eq!(stored.summary, "Motion designer");
        assert_eq!(stored.languages.len(), 1);
    }

    #[actix_web::test]
    async fn test_save_when_backend_disabled() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(create_test_token_provider()))
                .service(save_resume_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/resume")
            .insert_header(admin_auth_header())
            .set_json(json!({ "summary": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
