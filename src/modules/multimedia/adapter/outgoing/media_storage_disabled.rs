use async_trait::async_trait;
use tracing::warn;

use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::modules::multimedia::application::ports::outgoing::MediaStorage;
use crate::shared::backend::StoreError;

/// Storage stand-in when no content store is configured.
#[derive(Debug, Clone, Default)]
pub struct MediaStorageDisabled;

#[async_trait]
impl MediaStorage for MediaStorageDisabled {
    async fn upload(
        &self,
        bucket: Bucket,
        object_name: &str,
        _file: UploadFile,
        _upsert: bool,
    ) -> Result<(), StoreError> {
        warn!("Upload of {} to {} skipped: content store not configured", object_name, bucket);
        Err(StoreError::Disabled)
    }

    async fn remove(&self, _bucket: Bucket, _object_names: Vec<String>) -> Result<(), StoreError> {
        Err(StoreError::Disabled)
    }

    fn public_url(&self, _bucket: Bucket, _object_name: &str) -> Option<String> {
        None
    }
}
