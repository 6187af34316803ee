use std::future::Future;

use folio_models::email_address::EmailAddressWithName;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hand the email over to the provider. Exactly one delivery attempt is
    /// made; failures are not retried.
    fn send(&self, email: Email) -> impl Future<Output = Result<(), EmailSendError>> + Send;

    /// Check that the provider is reachable and accepts our credentials.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub body: EmailBody,
    pub reply_to: Option<EmailAddressWithName>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    Text(String),
    /// Plain text and HTML renderings of the same content.
    Alternative { text: String, html: String },
}

impl EmailBody {
    /// Every email has a plain text rendering.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Alternative { text, .. } => text,
        }
    }

    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Alternative { html, .. } => Some(html),
            Self::Text(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum EmailSendError {
    /// The provider could not be reached or refused the message.
    #[error("Email provider failed to accept the message: {0:#}")]
    Provider(anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<(), EmailSendError>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_renderings() {
        let text = EmailBody::Text("plain".into());
        assert_eq!(text.text(), "plain");
        assert_eq!(text.html(), None);

        let alternative = EmailBody::Alternative {
            text: "plain".into(),
            html: "<p>html</p>".into(),
        };
        assert_eq!(alternative.text(), "plain");
        assert_eq!(alternative.html(), Some("<p>html</p>"));
    }
}
