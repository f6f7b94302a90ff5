// src/shared/config.rs
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    }
}

/// Process-level settings that are not tied to a single module.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub local_storage_path: PathBuf,
    pub resume_file_path: PathBuf,
    /// Object name of the resume inside the `resumes` bucket.
    pub resume_object_name: String,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_RESUME_FILE_PATH: &'static str = "public/resume.pdf";
    pub const DEFAULT_RESUME_OBJECT_NAME: &'static str = "resume.pdf";

    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            Err(_) => Self::DEFAULT_PORT,
        };

        let local_storage_path = env::var("LOCAL_STORAGE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| crate::shared::backend::LocalStore::DEFAULT_PATH.to_string());

        let resume_file_path = env::var("RESUME_FILE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_RESUME_FILE_PATH.to_string());

        let resume_object_name = env::var("RESUME_OBJECT_NAME")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_RESUME_OBJECT_NAME.to_string());

        Ok(Self {
            host,
            port,
            local_storage_path: PathBuf::from(local_storage_path),
            resume_file_path: PathBuf::from(resume_file_path),
            resume_object_name,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a required, non-blank environment variable.
pub fn required_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}
