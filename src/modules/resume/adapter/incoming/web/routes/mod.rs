mod apply_resume_edits;
mod get_resume;
mod get_resume_draft;
mod save_resume;

pub use apply_resume_edits::{apply_resume_edits_handler, ResumeEditsRequest};
pub use get_resume::get_resume_handler;
pub use get_resume_draft::get_resume_draft_handler;
pub use save_resume::save_resume_handler;
pub use get_resume::__path_get_resume_handler;
pub use save_resume::__path_save_resume_handler;
pub use get_resume_draft::__path_get_resume_draft_handler;
pub use apply_resume_edits::__path_apply_resume_edits_handler;

use actix_web::HttpResponse;

use crate::modules::resume::application::ports::incoming::use_cases::{
    LoadResumeError, SaveResumeError,
};
use crate::shared::api::ApiResponse;

fn save_error_response(err: SaveResumeError) -> HttpResponse {
    match err {
        SaveResumeError::BackendDisabled => ApiResponse::backend_disabled(),
        SaveResumeError::RepositoryError(_) => {
            ApiResponse::bad_gateway("RESUME_SAVE_FAILED", "Failed to save resume")
        }
    }
}

fn load_error_response(err: LoadResumeError) -> HttpResponse {
    match err {
        LoadResumeError::BackendDisabled => ApiResponse::backend_disabled(),
        LoadResumeError::RepositoryError(_) => {
            ApiResponse::bad_gateway("RESUME_LOAD_FAILED", "Failed to load resume")
        }
    }
}
