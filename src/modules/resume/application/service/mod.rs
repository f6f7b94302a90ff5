mod get_resume_service;
mod save_resume_service;

pub use get_resume_service::GetResumeService;
pub use save_resume_service::SaveResumeService;
