mod delete_media;
mod get_resume_url;
mod upload_media;
mod upload_resume_file;

pub use delete_media::DeleteMediaUseCase;
pub use get_resume_url::GetResumeUrlUseCase;
pub use upload_media::{UploadMediaError, UploadMediaUseCase};
pub use upload_resume_file::UploadResumeFileUseCase;
