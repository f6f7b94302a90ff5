use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::multimedia::application::domain::object_name::generate_object_name;
use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::modules::multimedia::application::ports::incoming::use_cases::{
    UploadMediaError, UploadMediaUseCase,
};
use crate::modules::multimedia::application::ports::outgoing::MediaStorage;

pub struct UploadMediaService<S>
where
    S: MediaStorage,
{
    storage: S,
    policy: UploadPolicy,
}

impl<S> UploadMediaService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }
}

#[async_trait]
impl<S> UploadMediaUseCase for UploadMediaService<S>
where
    S: MediaStorage + Send + Sync,
{
    async fn execute(&self, bucket: Bucket, file: UploadFile) -> Result<String, UploadMediaError> {
        self.policy.validate(&file)?;

        let object_name = generate_object_name(&file.file_name);

        self.storage
            .upload(bucket, &object_name, file, false)
            .await
            .map_err(|e| {
                error!("Error uploading {} to {}: {}", object_name, bucket, e);
                UploadMediaError::from(e)
            })?;

        info!("Uploaded {} to {}", object_name, bucket);

        self.storage
            .public_url(bucket, &object_name)
            .ok_or(UploadMediaError::BackendDisabled)
    }
}
