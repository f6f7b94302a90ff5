use std::path::Path;

use crate::modules::multimedia::application::domain::entities::UploadFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Invalid file name")]
    InvalidFileName,

    #[error("File is empty")]
    EmptyFile,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: 255,
        }
    }
}

impl UploadPolicy {
    /// Project videos are the largest uploads.
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

    /// Env var: `MEDIA_MAX_FILE_SIZE_BYTES`.
    pub fn from_env() -> Self {
        let max_file_size_bytes = std::env::var("MEDIA_MAX_FILE_SIZE_BYTES")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }

    pub fn validate(&self, file: &UploadFile) -> Result<(), UploadRejection> {
        sanitize_basename(&file.file_name, self.max_file_name_len)?;

        if file.bytes.is_empty() {
            return Err(UploadRejection::EmptyFile);
        }

        if file.size() > self.max_file_size_bytes {
            return Err(UploadRejection::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes: file.size(),
            });
        }

        Ok(())
    }
}

fn sanitize_basename(file_name: &str, max_len: usize) -> Result<(), UploadRejection> {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or(UploadRejection::InvalidFileName)?;

    if base.is_empty() || base.len() > max_len {
        return Err(UploadRejection::InvalidFileName);
    }

    // Path-like input
    if base != file_name {
        return Err(UploadRejection::InvalidFileName);
    }

    if base.chars().any(|c| c.is_control()) {
        return Err(UploadRejection::InvalidFileName);
    }

    Ok(())
}
