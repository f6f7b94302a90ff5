use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ResumeUrlResponse {
    pub url: String,
}

/// Where the resume file can be downloaded from
///
/// Falls back to the locally served copy when the content store is not
/// configured.
#[utoipa::path(
    get,
    path = "/api/resume/url",
    tag = "resume",
    responses(
        (status = 200, description = "Resume URL", body = inline(SuccessResponse<ResumeUrlResponse>)),
    )
)]
#[get("/api/resume/url")]
pub async fn get_resume_url_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(ResumeUrlResponse {
        url: data.media.resume_url.execute(),
    })
}
