use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::project::application::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List featured projects
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Featured projects in display order", body = inline(SuccessResponse<Vec<Project>>)),
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.project.get_featured.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::adapter::incoming::web::routes::get_project_by_slug_handler;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::project_test_fixtures::sample_project;
    use crate::tests::support::stubs::StubGetFeaturedProjectsUseCase;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_featured_route_is_not_taken_as_a_slug() {
        let mut featured = sample_project("hero", Some(1));
        featured.is_featured = true;

        let app_state = TestAppStateBuilder::default()
            .with_get_featured_projects(StubGetFeaturedProjectsUseCase::returning(vec![featured]))
            .build();

        // Same registration order as the server.
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_featured_projects_handler)
                .service(get_project_by_slug_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/featured")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["slug"], "hero");
        assert_eq!(body["data"][0]["is_featured"], true);
    }
}
