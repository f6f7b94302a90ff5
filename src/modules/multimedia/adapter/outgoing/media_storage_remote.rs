use async_trait::async_trait;

use crate::modules::multimedia::application::domain::{Bucket, UploadFile};
use crate::modules::multimedia::application::ports::outgoing::MediaStorage;
use crate::shared::backend::{RestClient, StoreError};

#[derive(Clone)]
pub struct MediaStorageRemote {
    client: RestClient,
}

impl MediaStorageRemote {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MediaStorage for MediaStorageRemote {
    async fn upload(
        &self,
        bucket: Bucket,
        object_name: &str,
        file: UploadFile,
        upsert: bool,
    ) -> Result<(), StoreError> {
        self.client
            .upload_object(
                bucket.as_str(),
                object_name,
                &file.content_type,
                file.bytes,
                upsert,
            )
            .await
    }

    async fn remove(&self, bucket: Bucket, object_names: Vec<String>) -> Result<(), StoreError> {
        self.client
            .remove_objects(bucket.as_str(), &object_names)
            .await
    }

    fn public_url(&self, bucket: Bucket, object_name: &str) -> Option<String> {
        Some(self.client.public_url(bucket.as_str(), object_name))
    }
}
