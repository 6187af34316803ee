use anyhow::{anyhow, Context};
use folio_email_contracts::{Email, EmailBody, EmailSendError, EmailService};
use folio_models::email_address::EmailAddressWithName;
use folio_utils::Apply;
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Sends emails through an SMTP relay.
#[derive(Debug, Clone)]
pub struct SmtpEmailService {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    pub fn new(url: &str, from: EmailAddressWithName) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)
            .context("Invalid smtp url")?
            .build();

        Ok(Self { from, transport })
    }
}

impl EmailService for SmtpEmailService {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let message = build_message(&self.from, email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|err| EmailSendError::Provider(err.into()))?;

        if !response.is_positive() {
            let detail = response.message().collect::<Vec<_>>().join(" ");
            return Err(EmailSendError::Provider(anyhow!(
                "SMTP server responded with {}: {detail}",
                response.code()
            )));
        }

        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(from: &EmailAddressWithName, email: Email) -> anyhow::Result<Message> {
    let builder = Message::builder()
        .from(from.0.clone())
        .to(email.recipient.0)
        .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
        .subject(email.subject);

    let message = match email.body {
        EmailBody::Text(text) => builder.header(header::ContentType::TEXT_PLAIN).body(text),
        EmailBody::Alternative { text, html } => {
            builder.multipart(MultiPart::alternative_plain_html(text, html))
        }
    }?;

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternative_message() {
        let email = Email {
            recipient: "Owner <owner@example.com>".parse().unwrap(),
            subject: "Portfolio Contact from Ada Lovelace".into(),
            body: EmailBody::Alternative {
                text: "plain body".into(),
                html: "<p>html body</p>".into(),
            },
            reply_to: Some("ada@example.com".parse().unwrap()),
        };

        let message = build_message(&"noreply@example.com".parse().unwrap(), email).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("From: noreply@example.com\r\n"));
        assert!(formatted.contains("Reply-To: ada@example.com\r\n"));
        assert!(formatted.contains("Subject: Portfolio Contact from Ada Lovelace\r\n"));
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("plain body"));
        assert!(formatted.contains("<p>html body</p>"));
    }

    #[test]
    fn text_message_without_reply_to() {
        let email = Email {
            recipient: "owner@example.com".parse().unwrap(),
            subject: "Test".into(),
            body: EmailBody::Text("plain body".into()),
            reply_to: None,
        };

        let message = build_message(&"noreply@example.com".parse().unwrap(), email).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(!formatted.contains("Reply-To"));
        assert!(formatted.contains("Content-Type: text/plain"));
    }

    #[tokio::test]
    async fn invalid_url() {
        let result = SmtpEmailService::new("not a url", "noreply@example.com".parse().unwrap());
        assert!(result.is_err());
    }
}
