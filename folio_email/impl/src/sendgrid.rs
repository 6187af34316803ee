use std::sync::Arc;

use anyhow::{anyhow, ensure, Context};
use folio_email_contracts::{Email, EmailSendError, EmailService};
use folio_models::{email_address::EmailAddressWithName, Sensitive};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::http;

const API_URL: &str = "https://api.sendgrid.com/";
const MAIL_SEND_SCOPE: &str = "mail.send";

/// Sends emails through the SendGrid v3 web API.
#[derive(Debug, Clone)]
pub struct SendGridEmailService {
    client: reqwest::Client,
    config: Arc<SendGridEmailServiceConfig>,
}

#[derive(Debug)]
struct SendGridEmailServiceConfig {
    api_key: Sensitive<String>,
    mail_send_endpoint: Url,
    scopes_endpoint: Url,
    from: EmailAddressWithName,
}

impl SendGridEmailService {
    pub fn new(
        api_key: Sensitive<String>,
        api_url_override: Option<Url>,
        from: EmailAddressWithName,
    ) -> anyhow::Result<Self> {
        let mut api_url = match api_url_override {
            Some(url) => url,
            None => API_URL.parse()?,
        };
        if !api_url.path().ends_with('/') {
            api_url.set_path(&format!("{}/", api_url.path()));
        }

        Ok(Self {
            client: http::client()?,
            config: SendGridEmailServiceConfig {
                api_key,
                mail_send_endpoint: api_url.join("v3/mail/send")?,
                scopes_endpoint: api_url.join("v3/scopes")?,
                from,
            }
            .into(),
        })
    }
}

impl EmailService for SendGridEmailService {
    async fn send(&self, email: Email) -> Result<(), EmailSendError> {
        let request = MailSendRequest::new(&self.config.from, &email);

        let response = self
            .client
            .post(self.config.mail_send_endpoint.clone())
            .bearer_auth(&*self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to reach SendGrid")
            .map_err(EmailSendError::Provider)?;

        let status = response.status();
        if status.is_success() {
            let message_id = response
                .headers()
                .get("x-message-id")
                .and_then(|value| value.to_str().ok());
            debug!(%status, ?message_id, "email accepted by sendgrid");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(EmailSendError::Provider(anyhow!(
            "SendGrid responded with status {status}: {body}"
        )))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let ScopesResponse { scopes } = self
            .client
            .get(self.config.scopes_endpoint.clone())
            .bearer_auth(&*self.config.api_key)
            .send()
            .await
            .context("Failed to reach SendGrid")?
            .error_for_status()
            .context("SendGrid rejected the api key")?
            .json()
            .await?;

        ensure!(
            scopes.iter().any(|scope| scope == MAIL_SEND_SCOPE),
            "SendGrid api key is missing the {MAIL_SEND_SCOPE:?} scope"
        );

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Address<'a>>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: &'a str,
}

#[derive(Deserialize)]
struct ScopesResponse {
    scopes: Vec<String>,
}

impl<'a> MailSendRequest<'a> {
    fn new(from: &'a EmailAddressWithName, email: &'a Email) -> Self {
        // sendgrid requires text/plain to come before text/html
        let text = Content {
            content_type: "text/plain",
            value: email.body.text(),
        };
        let html = email.body.html().map(|value| Content {
            content_type: "text/html",
            value,
        });
        let content = std::iter::once(text).chain(html).collect();

        Self {
            personalizations: [Personalization {
                to: [(&email.recipient).into()],
            }],
            from: from.into(),
            reply_to: email.reply_to.as_ref().map(Into::into),
            subject: &email.subject,
            content,
        }
    }
}

impl<'a> From<&'a EmailAddressWithName> for Address<'a> {
    fn from(value: &'a EmailAddressWithName) -> Self {
        Self {
            email: value.email(),
            name: value.name(),
        }
    }
}
