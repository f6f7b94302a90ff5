use email_address::EmailAddress;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Name must be at most {max} characters")]
    NameTooLong { max: usize },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Message must be at most {max} characters")]
    MessageTooLong { max: usize },
}

/// A validated contact form entry, shaped like a `contacts` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: Option<String>,
}

impl ContactSubmission {
    pub const MAX_NAME_LEN: usize = 120;
    pub const MAX_MESSAGE_LEN: usize = 5000;

    /// Blank messages are stored as `null`.
    pub fn new(name: &str, email: &str, message: Option<&str>) -> Result<Self, ContactValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactValidationError::MissingName);
        }
        if name.chars().count() > Self::MAX_NAME_LEN {
            return Err(ContactValidationError::NameTooLong {
                max: Self::MAX_NAME_LEN,
            });
        }

        let email = email.trim();
        if EmailAddress::from_str(email).is_err() {
            return Err(ContactValidationError::InvalidEmail);
        }

        let message = message.map(str::trim).filter(|m| !m.is_empty());
        if let Some(m) = message {
            if m.chars().count() > Self::MAX_MESSAGE_LEN {
                return Err(ContactValidationError::MessageTooLong {
                    max: Self::MAX_MESSAGE_LEN,
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.map(str::to_string),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
