use nutype::nutype;
use thiserror::Error;

use crate::email_address::EmailAddress;

/// A validated contact form submission.
///
/// A value of this type only exists if all three fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
}

impl ContactSubmission {
    /// Validates the raw form fields in order (`name`, `email`, `message`)
    /// and returns the first violation.
    pub fn new(
        name: impl Into<String>,
        email: &str,
        message: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        Ok(Self {
            name: ContactName::try_new(name.into())
                .map_err(|_| ContactValidationError::NameTooShort)?,
            email: email
                .parse()
                .map_err(|_| ContactValidationError::InvalidEmail)?,
            message: ContactMessageContent::try_new(message.into())
                .map_err(|_| ContactValidationError::MessageTooShort)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 2),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);
