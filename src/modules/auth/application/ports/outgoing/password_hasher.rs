use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    /// The stored admin hash is malformed or could not be checked.
    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Verifies the admin password at login; `hash_password` backs the
/// `hash-password` command that produces `ADMIN_PASSWORD_HASH`.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a mismatch; `Err` only when the hash cannot be used.
    async fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, HashError>;
}
