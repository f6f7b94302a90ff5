use std::env;
use std::fmt;

/// The single site administrator, configured out of band.
///
/// Only an Argon2 PHC string is kept; the plain password never reaches the
/// process environment.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    email: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(email: &str, password_hash: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash: password_hash.trim().to_string(),
        }
    }

    /// `None` when either `ADMIN_EMAIL` or `ADMIN_PASSWORD_HASH` is missing or blank.
    pub fn from_env() -> Option<Self> {
        let email = env::var("ADMIN_EMAIL").ok().filter(|v| !v.trim().is_empty())?;
        let hash = env::var("ADMIN_PASSWORD_HASH")
            .ok()
            .filter(|v| !v.trim().is_empty())?;
        Some(Self::new(&email, &hash))
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Case-insensitive match against an already normalized address.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email == email.trim().to_lowercase()
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
