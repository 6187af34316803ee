use folio_models::contact::{ContactSubmission, ContactValidationError};
use serde::Deserialize;

/// Contact form submission as sent by the client.
///
/// A missing field is read as an empty string. It is not reported as
/// "required": it fails the length or address check of that field instead,
/// so `{}` is rejected with the name message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactSubmission {
    /// Name of the person reaching out
    pub name: String,
    /// Address replies should go to
    pub email: String,
    /// Free text body of the message
    pub message: String,
}

impl TryFrom<ApiContactSubmission> for ContactSubmission {
    type Error = ContactValidationError;

    fn try_from(value: ApiContactSubmission) -> Result<Self, Self::Error> {
        ContactSubmission::new(value.name, &value.email, value.message)
    }
}
