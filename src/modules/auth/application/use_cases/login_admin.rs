use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, warn};

use crate::modules::auth::application::domain::AdminCredentials;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};

// ========================= Login Request =========================
/// Validated admin login request. Deserializing runs the same checks as `new`.
#[derive(Debug, Clone)]
pub struct LoginAdminRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAdminRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginAdminRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginAdminRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginAdminRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginAdminRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginAdminRequestError {}

impl LoginAdminRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginAdminRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginAdminRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginAdminRequestError::InvalidEmailFormat);
        }

        // Passwords are compared as typed; only emptiness is checked.
        if password.trim().is_empty() {
            return Err(LoginAdminRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginAdminRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            email: String,
            password: String,
        }

        let helper = Helper::deserialize(deserializer)?;
        LoginAdminRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    InvalidCredentials,
    AdminNotConfigured,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::AdminNotConfigured => write!(f, "Admin account is not configured"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for LoginError {}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the access token expires.
    pub expires_in: i64,
}

// ============================ Use Case =============================
#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginAdminRequest) -> Result<LoginAdminResponse, LoginError>;
}

#[derive(Debug, Clone)]
pub struct LoginAdminService<H, T>
where
    H: PasswordHasher,
    T: TokenProvider,
{
    credentials: Option<AdminCredentials>,
    hasher: H,
    tokens: T,
}

impl<H, T> LoginAdminService<H, T>
where
    H: PasswordHasher,
    T: TokenProvider,
{
    pub fn new(credentials: Option<AdminCredentials>, hasher: H, tokens: T) -> Self {
        Self {
            credentials,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<H, T> LoginAdminUseCase for LoginAdminService<H, T>
where
    H: PasswordHasher,
    T: TokenProvider,
{
    async fn execute(&self, request: LoginAdminRequest) -> Result<LoginAdminResponse, LoginError> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            warn!("Admin login attempted but no admin credentials are configured");
            LoginError::AdminNotConfigured
        })?;

        if !credentials.matches_email(request.email()) {
            return Err(LoginError::InvalidCredentials);
        }

        let is_valid = self
            .hasher
            .verify_password(request.password(), credentials.password_hash())
            .await
            .map_err(|e| {
                error!(error = %e, "Admin password verification failed");
                LoginError::PasswordVerificationFailed(e.to_string())
            })?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(credentials.email())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.access_token_ttl(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::{
        HashError, TokenClaims, TokenError,
    };
    use mockall::{mock, predicate::eq};
    use serde_json::json;

    mock! {
        pub HasherMock {}
        #[async_trait]
        impl PasswordHasher for HasherMock {
            async fn hash_password(&self, password: &str) -> Result<String, HashError>;
            async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
        }
    }

    mock! {
        pub TokensMock {}
        impl TokenProvider for TokensMock {
            fn generate_access_token(&self, subject: &str) -> Result<String, TokenError>;
            fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
            fn access_token_ttl(&self) -> i64;
        }
    }

    fn admin() -> Option<AdminCredentials> {
        Some(AdminCredentials::new("admin@example.com", "$argon2id$stored"))
    }

    fn request(email: &str, password: &str) -> LoginAdminRequest {
        LoginAdminRequest::new(email.to_string(), password.to_string()).unwrap()
    }

    /* ---------------- request validation ---------------- */

    #[test]
    fn test_request_normalizes_email() {
        let req = request("  Admin@Example.COM ", "secret");
        assert_eq!(req.email(), "admin@example.com");
        assert_eq!(req.password(), "secret");
    }

    #[test]
    fn test_request_rejects_bad_input() {
        assert_eq!(
            LoginAdminRequest::new("".into(), "x".into()).unwrap_err(),
            LoginAdminRequestError::EmptyEmail
        );
        assert_eq!(
            LoginAdminRequest::new("not-an-email".into(), "x".into()).unwrap_err(),
            LoginAdminRequestError::InvalidEmailFormat
        );
        assert_eq!(
            LoginAdminRequest::new("a@b.com".into(), "   ".into()).unwrap_err(),
            LoginAdminRequestError::EmptyPassword
        );
    }

    #[test]
    fn test_request_deserialize_validates() {
        let ok: LoginAdminRequest =
            serde_json::from_value(json!({ "email": "a@b.com", "password": "pw" })).unwrap();
        assert_eq!(ok.email(), "a@b.com");

        let bad: Result<LoginAdminRequest, _> =
            serde_json::from_value(json!({ "email": "nope", "password": "pw" }));
        assert!(bad.is_err());
    }

    /* ---------------- execute ---------------- */

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let mut hasher = MockHasherMock::new();
        hasher
            .expect_verify_password()
            .with(eq("secret"), eq("$argon2id$stored"))
            .times(1)
            .returning(|_, _| Ok(true));

        let mut tokens = MockTokensMock::new();
        tokens
            .expect_generate_access_token()
            .with(eq("admin@example.com"))
            .returning(|_| Ok("jwt-token".to_string()));
        tokens.expect_access_token_ttl().returning(|| 3600);

        let service = LoginAdminService::new(admin(), hasher, tokens);
        let response = service
            .execute(request("ADMIN@example.com", "secret"))
            .await
            .unwrap();

        assert_eq!(response.access_token, "jwt-token");
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
    }

    #[tokio::test]
    async fn test_login_wrong_email_skips_hashing() {
        let mut hasher = MockHasherMock::new();
        hasher.expect_verify_password().times(0);
        let tokens = MockTokensMock::new();

        let service = LoginAdminService::new(admin(), hasher, tokens);
        let result = service.execute(request("other@example.com", "secret")).await;

        assert_eq!(result.unwrap_err(), LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut hasher = MockHasherMock::new();
        hasher.expect_verify_password().returning(|_, _| Ok(false));
        let mut tokens = MockTokensMock::new();
        tokens.expect_generate_access_token().times(0);

        let service = LoginAdminService::new(admin(), hasher, tokens);
        let result = service.execute(request("admin@example.com", "wrong")).await;

        assert_eq!(result.unwrap_err(), LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_without_configured_admin() {
        let service = LoginAdminService::new(None, MockHasherMock::new(), MockTokensMock::new());
        let result = service.execute(request("admin@example.com", "secret")).await;

        assert_eq!(result.unwrap_err(), LoginError::AdminNotConfigured);
    }

    #[tokio::test]
    async fn test_login_hasher_failure() {
        let mut hasher = MockHasherMock::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Err(HashError::VerifyFailed));

        let service = LoginAdminService::new(admin(), hasher, MockTokensMock::new());
        let result = service.execute(request("admin@example.com", "secret")).await;

        assert!(matches!(
            result,
            Err(LoginError::PasswordVerificationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_login_token_failure() {
        let mut hasher = MockHasherMock::new();
        hasher.expect_verify_password().returning(|_, _| Ok(true));
        let mut tokens = MockTokensMock::new();
        tokens
            .expect_generate_access_token()
            .returning(|_| Err(TokenError::EncodingError("boom".to_string())));

        let service = LoginAdminService::new(admin(), hasher, tokens);
        let result = service.execute(request("admin@example.com", "secret")).await;

        assert_eq!(
            result.unwrap_err(),
            LoginError::TokenGenerationFailed("Token encoding error: boom".to_string())
        );
    }

    #[test]
    fn test_login_error_display() {
        assert_eq!(
            LoginError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            LoginError::AdminNotConfigured.to_string(),
            "Admin account is not configured"
        );
    }
}
