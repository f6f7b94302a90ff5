use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::multimedia::application::domain::object_name::object_name_from_url;
use crate::modules::multimedia::application::domain::Bucket;
use crate::modules::multimedia::application::ports::incoming::use_cases::DeleteMediaUseCase;
use crate::modules::multimedia::application::ports::outgoing::MediaStorage;

pub struct DeleteMediaService<S>
where
    S: MediaStorage,
{
    storage: S,
}

impl<S> DeleteMediaService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> DeleteMediaUseCase for DeleteMediaService<S>
where
    S: MediaStorage + Send + Sync,
{
    async fn execute(&self, url: &str, bucket: Bucket) -> bool {
        let Some(object_name) = object_name_from_url(url) else {
            warn!("No object name in media url {:?}", url);
            return false;
        };

        match self.storage.remove(bucket, vec![object_name.clone()]).await {
            Ok(()) => {
                info!("Removed {} from {}", object_name, bucket);
                true
            }
            Err(e) => {
                error!("Error deleting {} from {}: {}", object_name, bucket, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::multimedia::application::domain::UploadFile;
    use crate::shared::backend::StoreError;
    use std::sync::Mutex;

    struct MockStorage {
        result: Result<(), StoreError>,
        removed: Mutex<Vec<(Bucket, Vec<String>)>>,
    }

    #[async_trait]
    impl MediaStorage for MockStorage {
        async fn upload(
            &self,
            _bucket: Bucket,
            _object_name: &str,
            _file: UploadFile,
            _upsert: bool,
        ) -> Result<(), StoreError> {
            unimplemented!("not needed for delete tests")
        }

        async fn remove(&self, bucket: Bucket, object_names: Vec<String>) -> Result<(), StoreError> {
            self.removed.lock().unwrap().push((bucket, object_names));
            self.result.clone()
        }

        fn public_url(&self, _bucket: Bucket, _object_name: &str) -> Option<String> {
            None
        }
    }

    fn service(result: Result<(), StoreError>) -> DeleteMediaService<MockStorage> {
        DeleteMediaService::new(MockStorage {
            result,
            removed: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn test_execute_removes_trailing_segment() {
        let service = service(Ok(()));

        let ok = service
            .execute(
                "https://x.example.co/storage/v1/object/public/project-videos/17-abc.mp4",
                Bucket::ProjectVideos,
            )
            .await;

        assert!(ok);
        assert_eq!(
            service.storage.removed.lock().unwrap().clone(),
            vec![(Bucket::ProjectVideos, vec!["17-abc.mp4".to_string()])]
        );
    }

    #[tokio::test]
    async fn test_execute_empty_segment_is_false_without_call() {
        let service = service(Ok(()));

        assert!(!service.execute("https://cdn.example.com/", Bucket::ProjectImages).await);
        assert!(service.storage.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_execute_failure_is_false() {
        let service = service(Err(StoreError::Disabled));

        assert!(!service.execute("https://cdn.example.com/a.png", Bucket::ProjectImages).await);
    }
}
