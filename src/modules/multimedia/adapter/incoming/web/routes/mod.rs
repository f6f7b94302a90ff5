mod delete_media;
mod get_resume_url;
mod upload_media;
mod upload_resume_file;

pub use delete_media::{delete_media_handler, DeleteMediaRequest, DeleteMediaResponse};
pub use get_resume_url::{get_resume_url_handler, ResumeUrlResponse};
pub use upload_media::{upload_media_handler, UploadFileQuery, UploadMediaResponse};
pub use upload_resume_file::upload_resume_file_handler;
pub use upload_resume_file::__path_upload_resume_file_handler;
pub use upload_media::__path_upload_media_handler;
pub use delete_media::__path_delete_media_handler;
pub use get_resume_url::__path_get_resume_url_handler;

use actix_web::{http::header::CONTENT_TYPE, HttpRequest, HttpResponse};

use crate::modules::multimedia::application::domain::policies::UploadRejection;
use crate::modules::multimedia::application::domain::Bucket;
use crate::modules::multimedia::application::ports::incoming::use_cases::UploadMediaError;
use crate::shared::api::ApiResponse;

/// Buckets reachable through the generic media routes. The resume has its own.
fn project_bucket(raw: &str) -> Result<Bucket, HttpResponse> {
    match raw.parse::<Bucket>() {
        Ok(Bucket::Resumes) => Err(ApiResponse::bad_request(
            "INVALID_BUCKET",
            "The resumes bucket is managed through /api/admin/resume/file",
        )),
        Ok(bucket) => Ok(bucket),
        Err(e) => Err(ApiResponse::bad_request("INVALID_BUCKET", &e.to_string())),
    }
}

pub(crate) fn content_type(req: &HttpRequest) -> Option<&str> {
    req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
}

pub(crate) fn upload_error_response(err: UploadMediaError) -> HttpResponse {
    match err {
        UploadMediaError::Rejected(UploadRejection::InvalidFileName) => {
            ApiResponse::bad_request("INVALID_FILE_NAME", "Invalid file name")
        }
        UploadMediaError::Rejected(UploadRejection::EmptyFile) => {
            ApiResponse::bad_request("EMPTY_FILE", "File is empty")
        }
        UploadMediaError::Rejected(e @ UploadRejection::FileTooLarge { .. }) => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &e.to_string())
        }
        UploadMediaError::BackendDisabled => ApiResponse::backend_disabled(),
        UploadMediaError::StorageError(e) => {
            tracing::error!(error = %e, "media upload failed");
            ApiResponse::bad_gateway("STORAGE_ERROR", "Failed to store the file")
        }
    }
}
