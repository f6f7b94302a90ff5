mod get_resume;
mod save_resume;

pub use get_resume::{GetResumeUseCase, LoadResumeError};
pub use save_resume::{SaveResumeError, SaveResumeUseCase};
