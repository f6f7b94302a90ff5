use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct TrackingAccepted {
    pub queued: bool,
}

/// Record a resume download
///
/// The event is written in the background; the response never waits for it.
#[utoipa::path(
    post,
    path = "/api/analytics/resume-download",
    tag = "analytics",
    responses(
        (status = 202, description = "Event queued", body = inline(SuccessResponse<TrackingAccepted>)),
    )
)]
#[post("/api/analytics/resume-download")]
pub async fn track_resume_download_handler(data: web::Data<AppState>) -> impl Responder {
    let tracker = data.analytics.track_resume_download.clone();
    actix_web::rt::spawn(async move {
        tracker.execute().await;
    });

    ApiResponse::accepted(TrackingAccepted { queued: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::RecordingTrackResumeDownload;
    use actix_web::{http::StatusCode, test, App};
    use std::time::Duration;

    #[actix_web::test]
    async fn test_accepted_and_tracked() {
        let tracker = RecordingTrackResumeDownload::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_track_resume_download(tracker.clone())
                        .build(),
                )
                .service(track_resume_download_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/analytics/resume-download")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        for _ in 0..50 {
            if tracker.count() > 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(tracker.count(), 1);
    }
}
