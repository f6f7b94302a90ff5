/// Where visitors download the resume from.
pub trait GetResumeUrlUseCase: Send + Sync {
    fn execute(&self) -> String;
}
