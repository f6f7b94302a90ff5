use std::sync::Arc;

use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::modules::multimedia::application::ports::incoming::use_cases::{
    DeleteMediaUseCase, GetResumeUrlUseCase, UploadMediaUseCase, UploadResumeFileUseCase,
};

#[derive(Clone)]
pub struct MultimediaUseCases {
    pub upload: Arc<dyn UploadMediaUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMediaUseCase + Send + Sync>,
    pub upload_resume: Arc<dyn UploadResumeFileUseCase + Send + Sync>,
    pub resume_url: Arc<dyn GetResumeUrlUseCase + Send + Sync>,
    pub policy: UploadPolicy,
}
