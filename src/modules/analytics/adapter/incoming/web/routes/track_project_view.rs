use actix_web::{post, web, Responder};
use uuid::Uuid;

use super::TrackingAccepted;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Record a project view
#[utoipa::path(
    post,
    path = "/api/analytics/project-view/{id}",
    tag = "analytics",
    params(("id" = Uuid, Path, description = "Viewed project")),
    responses(
        (status = 202, description = "Event queued", body = inline(SuccessResponse<TrackingAccepted>)),
        (status = 404, description = "Malformed project id", body = ErrorResponse),
    )
)]
#[post("/api/analytics/project-view/{id}")]
pub async fn track_project_view_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    let tracker = data.analytics.track_project_view.clone();
    actix_web::rt::spawn(async move {
        tracker.execute(project_id).await;
    });

    ApiResponse::accepted(TrackingAccepted { queued: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::RecordingTrackProjectView;
    use actix_web::{http::StatusCode, test, App};
    use std::time::Duration;

    #[actix_web::test]
    async fn test_accepted_and_tracked() {
        let tracker = RecordingTrackProjectView::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_track_project_view(tracker.clone())
                        .build(),
                )
                .service(track_project_view_handler),
        )
        .await;

        let id = Uuid::new_v4();
        let req = test::TestRequest::post()
            .uri(&format!("/api/analytics/project-view/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        for _ in 0..50 {
            if !tracker.calls().is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(tracker.calls(), vec![id]);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_not_tracked() {
        let tracker = RecordingTrackProjectView::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_track_project_view(tracker.clone())
                        .build(),
                )
                .service(track_project_view_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/analytics/project-view/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_client_error());
        assert!(tracker.calls().is_empty());
    }
}
