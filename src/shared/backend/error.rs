// src/shared/backend/error.rs
use thiserror::Error;

/// Failure of a content store call, shared by every outgoing port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("content store is not configured")]
    Disabled,

    #[error("content store request failed: {0}")]
    Transport(String),

    #[error("content store returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode content store response: {0}")]
    Decode(String),

    #[error("conflicting record: {0}")]
    Conflict(String),

    #[error("local storage error: {0}")]
    LocalStorage(String),
}

impl StoreError {
    pub fn is_disabled(&self) -> bool {
        matches!(self, StoreError::Disabled)
    }
}
