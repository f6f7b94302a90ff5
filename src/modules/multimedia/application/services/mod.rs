mod delete_media_service;
mod get_resume_url_service;
mod upload_media_service;
mod upload_resume_file_service;

pub use delete_media_service::DeleteMediaService;
pub use get_resume_url_service::{GetResumeUrlService, RESUME_STATIC_PATH};
pub use upload_media_service::UploadMediaService;
pub use upload_resume_file_service::UploadResumeFileService;
