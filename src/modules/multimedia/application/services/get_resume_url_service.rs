use crate::modules::multimedia::application::domain::Bucket;
use crate::modules::multimedia::application::ports::incoming::use_cases::GetResumeUrlUseCase;
use crate::modules::multimedia::application::ports::outgoing::MediaStorage;

/// Route that serves the bundled resume file.
pub const RESUME_STATIC_PATH: &str = "/resume/download";

/// Public bucket URL when storage is available, otherwise the locally served
/// static copy.
pub struct GetResumeUrlService<S>
where
    S: MediaStorage,
{
    storage: S,
    object_name: String,
    static_path: String,
}

impl<S> GetResumeUrlService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S, object_name: impl Into<String>) -> Self {
        Self {
            storage,
            object_name: object_name.into(),
            static_path: RESUME_STATIC_PATH.to_string(),
        }
    }
}

impl<S> GetResumeUrlUseCase for GetResumeUrlService<S>
where
    S: MediaStorage + Send + Sync,
{
    fn execute(&self) -> String {
        self.storage
            .public_url(Bucket::Resumes, &self.object_name)
            .unwrap_or_else(|| self.static_path.clone())
    }
}
