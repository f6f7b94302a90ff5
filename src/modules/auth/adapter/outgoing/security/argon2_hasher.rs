use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::modules::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};
use crate::shared::config::ConfigError;

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
            #[cfg(test)]
            salt_override: None,
        }
    }
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;

        Ok(Self {
            params,
            #[cfg(test)]
            salt_override: None,
        })
    }

    /// Hashing cost from `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and
    /// `ARGON2_PARALLELISM`. Verification always uses the cost stored in the
    /// hash itself.
    pub fn from_env() -> Result<Self, ConfigError> {
        fn read(key: &'static str, default: u32) -> Result<u32, ConfigError> {
            match std::env::var(key) {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid { key, value: raw }),
                Err(_) => Ok(default),
            }
        }

        let memory_kib = read("ARGON2_MEMORY_KIB", Params::DEFAULT_M_COST)?;
        let iterations = read("ARGON2_ITERATIONS", Params::DEFAULT_T_COST)?;
        let parallelism = read("ARGON2_PARALLELISM", Params::DEFAULT_P_COST)?;

        Self::with_params(memory_kib, iterations, parallelism).map_err(|e| ConfigError::Invalid {
            key: "ARGON2_*",
            value: e.to_string(),
        })
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::new(4 * 1024, 3, 1, None).expect("Invalid params"),
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
        }
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
