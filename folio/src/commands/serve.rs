use std::sync::Arc;

use folio_api_rest::RestServer;
use folio_config::Config;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use folio_email_contracts::EmailService;
use folio_templates_impl::TemplateServiceImpl;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to email provider ({:?})", config.email.provider);
    let email = email::connect(&config.email)?;
    email.ping().await?;

    let contact = ContactServiceImpl::new(
        email,
        TemplateServiceImpl::default(),
        ContactServiceConfig {
            recipient: Arc::new(config.contact.email),
        },
    );

    let server = RestServer::new(contact);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
