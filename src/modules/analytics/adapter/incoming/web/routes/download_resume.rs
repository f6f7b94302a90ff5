use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Download the bundled resume PDF
///
/// Each successful download is counted in the background.
#[utoipa::path(
    get,
    path = "/resume/download",
    tag = "resume",
    responses(
        (status = 200, description = "Resume file", content_type = "application/pdf", body = Vec<u8>),
        (status = 404, description = "No resume file on disk", body = ErrorResponse),
    )
)]
#[get("/resume/download")]
pub async fn download_resume_handler(data: web::Data<AppState>) -> impl Responder {
    let bytes = match tokio::fs::read(&data.resume_file_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %data.resume_file_path.display(), "resume file missing");
            return ApiResponse::not_found("RESUME_FILE_NOT_FOUND", "Resume file not found");
        }
        Err(e) => {
            error!(path = %data.resume_file_path.display(), error = %e, "failed to read resume file");
            return ApiResponse::internal_error();
        }
    };

    let tracker = data.analytics.track_resume_download.clone();
    actix_web::rt::spawn(async move {
        tracker.execute().await;
    });

    HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            header::CONTENT_DISPOSITION,
            "inline; filename=\"resume.pdf\"",
        ))
        .body(bytes)
}
