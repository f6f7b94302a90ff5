use async_trait::async_trait;
use uuid::Uuid;

/// Failures are logged, never surfaced to the caller.
#[async_trait]
pub trait TrackProjectViewUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid);
}
