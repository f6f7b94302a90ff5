use async_trait::async_trait;

use crate::modules::multimedia::application::domain::Bucket;

/// Remove the object a public URL points at. `false` on any failure.
#[async_trait]
pub trait DeleteMediaUseCase: Send + Sync {
    async fn execute(&self, url: &str, bucket: Bucket) -> bool;
}
