use folio_email_contracts::{Email, EmailSendError, EmailService};

pub use self::{sendgrid::SendGridEmailService, smtp::SmtpEmailService};

pub mod http;
pub mod sendgrid;
pub mod smtp;

/// The email provider selected in the configuration.
#[derive(Debug, Clone)]
pub enum EmailServiceImpl {
    SendGrid(SendGridEmailService),
    Smtp(SmtpEmailService),
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        match self {
            Self::SendGrid(service) => service.send(email).await,
            Self::Smtp(service) => service.send(email).await,
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::SendGrid(service) => service.ping().await,
            Self::Smtp(service) => service.ping().await,
        }
    }
}

impl From<SendGridEmailService> for EmailServiceImpl {
    fn from(value: SendGridEmailService) -> Self {
        Self::SendGrid(value)
    }
}

impl From<SmtpEmailService> for EmailServiceImpl {
    fn from(value: SmtpEmailService) -> Self {
        Self::Smtp(value)
    }
}
