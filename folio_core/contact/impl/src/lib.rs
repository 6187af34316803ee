use std::sync::Arc;

use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_email_contracts::{Email, EmailBody, EmailSendError, EmailService};
use folio_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use folio_templates_contracts::{ContactMessageTemplate, TemplateService};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Where submissions are delivered to.
    pub recipient: Arc<EmailAddressWithName>,
}

impl<Email, Template> ContactServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template, config: ContactServiceConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, Template> ContactService for ContactServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        let ContactSubmission {
            name,
            email: author,
            message,
        } = submission;

        let html = self.template.render(&ContactMessageTemplate {
            name: name.to_string(),
            email: author.to_string(),
            message: message.to_string(),
        })?;

        let email = Email {
            recipient: (*self.config.recipient).clone(),
            // header values must stay on a single line
            subject: format!(
                "Portfolio Contact from {}",
                name.split_whitespace().collect::<Vec<_>>().join(" ")
            ),
            body: EmailBody::Alternative {
                text: format!("Name: {}\nEmail: {author}\n\nMessage:\n{}", *name, *message),
                html,
            },
            reply_to: Some(author.into()),
        };

        match self.email.send(email).await {
            Ok(()) => {
                info!("forwarded contact message");
                Ok(())
            }
            Err(EmailSendError::Provider(err)) => {
                error!("failed to send contact message: {err:#}");
                Err(ContactSendMessageError::Send)
            }
            Err(EmailSendError::Other(err)) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use folio_email_contracts::MockEmailService;
    use folio_templates_contracts::MockTemplateService;
    use folio_utils::assert_matches;

    use super::*;

    const MESSAGE: &str = "Hello, I would like to connect regarding a project.";

    fn submission() -> ContactSubmission {
        ContactSubmission::new("Ada Lovelace", "ada@example.com", MESSAGE).unwrap()
    }

    fn config() -> ContactServiceConfig {
        ContactServiceConfig {
            recipient: Arc::new("Owner <owner@example.com>".parse().unwrap()),
        }
    }

    fn template() -> ContactMessageTemplate {
        ContactMessageTemplate {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            message: MESSAGE.into(),
        }
    }

    fn expected_email(config: &ContactServiceConfig) -> Email {
        Email {
            recipient: (*config.recipient).clone(),
            subject: "Portfolio Contact from Ada Lovelace".into(),
            body: EmailBody::Alternative {
                text: format!("Name: Ada Lovelace\nEmail: ada@example.com\n\nMessage:\n{MESSAGE}"),
                html: "<p>rendered</p>".into(),
            },
            reply_to: Some("ada@example.com".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let config = config();
        let template = MockTemplateService::new().with_render(template(), "<p>rendered</p>".into());
        let email = MockEmailService::new().with_send(expected_email(&config), Ok(()));

        let sut = ContactServiceImpl::new(email, template, config);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn provider_error() {
        // Arrange
        let config = config();
        let template = MockTemplateService::new().with_render(template(), "<p>rendered</p>".into());
        let email = MockEmailService::new().with_send(
            expected_email(&config),
            Err(EmailSendError::Provider(anyhow!("401 Unauthorized"))),
        );

        let sut = ContactServiceImpl::new(email, template, config);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::Send));
    }

    #[tokio::test]
    async fn other_error() {
        // Arrange
        let config = config();
        let template = MockTemplateService::new().with_render(template(), "<p>rendered</p>".into());
        let email = MockEmailService::new().with_send(
            expected_email(&config),
            Err(EmailSendError::Other(anyhow!("invalid mailbox"))),
        );

        let sut = ContactServiceImpl::new(email, template, config);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::Other(_)));
    }

    #[tokio::test]
    async fn template_error_sends_nothing() {
        // Arrange
        let mut template = MockTemplateService::new();
        template
            .expect_render::<ContactMessageTemplate>()
            .once()
            .return_once(|_| Err(anyhow!("template not found")));
        let email = MockEmailService::new();

        let sut = ContactServiceImpl::new(email, template, config());

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::Other(_)));
    }

    #[tokio::test]
    async fn resubmission_sends_again() {
        // Arrange
        let config = config();
        let expected = expected_email(&config);

        let mut template = MockTemplateService::new();
        template
            .expect_render::<ContactMessageTemplate>()
            .times(2)
            .returning(|_| Ok("<p>rendered</p>".into()));
        let mut email = MockEmailService::new();
        email
            .expect_send()
            .times(2)
            .withf(move |email| *email == expected)
            .returning(|_| Box::pin(std::future::ready(Ok(()))));

        let sut = ContactServiceImpl::new(email, template, config);

        // Act
        let first = sut.send_message(submission()).await;
        let second = sut.send_message(submission()).await;

        // Assert
        first.unwrap();
        second.unwrap();
    }

    #[tokio::test]
    async fn subject_is_single_line() {
        // Arrange
        let config = config();
        let submission =
            ContactSubmission::new("Ada\r\nBcc: eve@example.com", "ada@example.com", MESSAGE)
                .unwrap();

        let mut template = MockTemplateService::new();
        template
            .expect_render::<ContactMessageTemplate>()
            .once()
            .return_once(|_| Ok("<p>rendered</p>".into()));
        let mut email = MockEmailService::new();
        email
            .expect_send()
            .once()
            .withf(|email| email.subject == "Portfolio Contact from Ada Bcc: eve@example.com")
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));

        let sut = ContactServiceImpl::new(email, template, config);

        // Act
        let result = sut.send_message(submission).await;

        // Assert
        result.unwrap();
    }
}
