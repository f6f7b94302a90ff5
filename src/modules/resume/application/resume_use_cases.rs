use std::sync::Arc;

use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, SaveResumeUseCase,
};

#[derive(Clone)]
pub struct ResumeUseCases {
    pub get: Arc<dyn GetResumeUseCase + Send + Sync>,
    pub save: Arc<dyn SaveResumeUseCase + Send + Sync>,
}
