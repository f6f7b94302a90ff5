use async_trait::async_trait;

use crate::modules::multimedia::application::domain::UploadFile;

use super::UploadMediaError;

/// Replace the downloadable resume file and return its public URL.
#[async_trait]
pub trait UploadResumeFileUseCase: Send + Sync {
    async fn execute(&self, file: UploadFile) -> Result<String, UploadMediaError>;
}
