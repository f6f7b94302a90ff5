use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::modules::multimedia::application::ports::incoming::use_cases::{
    UploadMediaError, UploadResumeFileUseCase,
};
use crate::modules::multimedia::application::ports::outgoing::MediaStorage;

/// The resume always lives under one fixed object name in the `resumes` bucket.
pub struct UploadResumeFileService<S>
where
    S: MediaStorage,
{
    storage: S,
    policy: UploadPolicy,
    object_name: String,
}

impl<S> UploadResumeFileService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S, policy: UploadPolicy, object_name: impl Into<String>) -> Self {
        Self {
            storage,
            policy,
            object_name: object_name.into(),
        }
    }
}

#[async_trait]
impl<S> UploadResumeFileUseCase for UploadResumeFileService<S>
where
    S: MediaStorage + Send + Sync,
{
    async fn execute(&self, file: UploadFile) -> Result<String, UploadMediaError> {
        self.policy.validate(&file)?;

        // A missing old object is fine; the upsert below replaces it anyway.
        if let Err(e) = self
            .storage
            .remove(Bucket::Resumes, vec![self.object_name.clone()])
            .await
        {
            if e.is_disabled() {
                return Err(UploadMediaError::BackendDisabled);
            }
            warn!("Could not remove previous resume file: {}", e);
        }

        self.storage
            .upload(Bucket::Resumes, &self.object_name, file, true)
            .await
            .map_err(|e| {
                error!("Error uploading resume: {}", e);
                UploadMediaError::from(e)
            })?;

        info!("Resume file replaced");

        self.storage
            .public_url(Bucket::Resumes, &self.object_name)
            .ok_or(UploadMediaError::BackendDisabled)
    }
}
