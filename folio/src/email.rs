use anyhow::Context;
use folio_config::{EmailConfig, EmailProvider};
use folio_email_impl::{EmailServiceImpl, SendGridEmailService, SmtpEmailService};

/// Set up the email provider selected in the config
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    match config.provider {
        EmailProvider::SendGrid => {
            let sendgrid = config
                .sendgrid
                .as_ref()
                .context("Missing [email.sendgrid] config section")?;
            SendGridEmailService::new(
                sendgrid.api_key.clone(),
                sendgrid.api_url.clone(),
                config.from.clone(),
            )
            .context("Failed to set up SendGrid client")
            .map(Into::into)
        }
        EmailProvider::Smtp => {
            let smtp = config
                .smtp
                .as_ref()
                .context("Missing [email.smtp] config section")?;
            SmtpEmailService::new(&smtp.url, config.from.clone())
                .context("Failed to connect to SMTP server")
                .map(Into::into)
        }
    }
}
