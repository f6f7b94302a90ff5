use async_trait::async_trait;

/// Failures are logged, never surfaced to the caller.
#[async_trait]
pub trait TrackResumeDownloadUseCase: Send + Sync {
    async fn execute(&self);
}
