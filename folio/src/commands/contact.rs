use anyhow::bail;
use clap::Subcommand;
use folio_client::{
    api::ContactApiServiceImpl,
    form::{ContactForm, ContactFormField, SubmitOutcome, ToastVariant},
};
use url::Url;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit a message through the contact form endpoint
    Send {
        /// URL of the contact endpoint
        #[arg(long, default_value = "http://127.0.0.1:8000/api/contact")]
        endpoint: Url,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                endpoint,
                name,
                email,
                message,
            } => send(endpoint, name, email, message).await,
        }
    }
}

async fn send(endpoint: Url, name: String, email: String, message: String) -> anyhow::Result<()> {
    let form = ContactForm::new(ContactApiServiceImpl::new(endpoint)?);
    form.set_field(ContactFormField::Name, name);
    form.set_field(ContactFormField::Email, email);
    form.set_field(ContactFormField::Message, message);

    match form.submit().await {
        SubmitOutcome::Completed(toast) => {
            println!("{}: {}", toast.title, toast.description);
            if toast.variant == ToastVariant::Destructive {
                bail!("{}", toast.description);
            }
            Ok(())
        }
        SubmitOutcome::Incomplete(field) => bail!("Missing required field: {field:?}"),
        SubmitOutcome::Suppressed => bail!("Another submission is in progress"),
    }
}
