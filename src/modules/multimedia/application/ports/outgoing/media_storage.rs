use async_trait::async_trait;

use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::shared::backend::StoreError;

/// Object storage for uploaded media.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store `file` under `object_name`. With `upsert` an existing object is
    /// replaced, otherwise the store rejects the duplicate.
    async fn upload(
        &self,
        bucket: Bucket,
        object_name: &str,
        file: UploadFile,
        upsert: bool,
    ) -> Result<(), StoreError>;

    async fn remove(&self, bucket: Bucket, object_names: Vec<String>) -> Result<(), StoreError>;

    /// `None` when there is no public storage to point at.
    fn public_url(&self, bucket: Bucket, object_name: &str) -> Option<String>;
}
