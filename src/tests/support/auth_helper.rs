#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::modules::auth::application::ports::outgoing::TokenProvider;

    pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";

    pub fn create_test_jwt_service() -> JwtTokenService {
        let jwt_config = JwtConfig {
            issuer: "folio-test".to_string(),
            secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
            access_token_expiry: 3600,
        };
        JwtTokenService::new(jwt_config)
    }

    /// Same shape the server registers as app data.
    pub fn create_test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(create_test_jwt_service())
    }

    /// `Authorization` header carrying a valid admin token for
    /// [`create_test_token_provider`].
    pub fn admin_auth_header() -> (&'static str, String) {
        let token = create_test_jwt_service()
            .generate_access_token(TEST_ADMIN_EMAIL)
            .expect("test token");
        ("Authorization", format!("Bearer {}", token))
    }
}
