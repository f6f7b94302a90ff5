use async_trait::async_trait;

use crate::modules::multimedia::application::domain::policies::UploadRejection;
use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::shared::backend::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadMediaError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error("Content store is not configured")]
    BackendDisabled,

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StoreError> for UploadMediaError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Disabled => UploadMediaError::BackendDisabled,
            other => UploadMediaError::StorageError(other.to_string()),
        }
    }
}

/// Upload under a freshly generated object name and return its public URL.
#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    async fn execute(&self, bucket: Bucket, file: UploadFile) -> Result<String, UploadMediaError>;
}
