use std::env;

use crate::shared::config::{required_var, ConfigError};

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;
    pub const DEFAULT_ACCESS_EXPIRY: i64 = 3600;
    pub const MAX_ACCESS_EXPIRY: i64 = 86400;
    pub const DEFAULT_ISSUER: &'static str = "folio";

    fn parse_expiry(key: &'static str, default: i64) -> Result<i64, ConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid { key, value: raw }),
            Err(_) => Ok(default),
        }
    }

    /// Load from `JWT_SECRET`, `JWT_ACCESS_EXPIRY` and `JWT_ISSUER`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required_var("JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key material.
        if secret_key.len() < Self::MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                value: format!("<{} chars, need {}>", secret_key.len(), Self::MIN_SECRET_LEN),
            });
        }

        let access_token_expiry =
            Self::parse_expiry("JWT_ACCESS_EXPIRY", Self::DEFAULT_ACCESS_EXPIRY)?;
        if access_token_expiry <= 0 || access_token_expiry > Self::MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        let issuer = env::var("JWT_ISSUER")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ISSUER.to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
