use std::sync::Arc;

use super::use_cases::LoginAdminUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase>,
}
