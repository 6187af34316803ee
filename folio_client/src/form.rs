use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::sync::watch;

use crate::api::ContactApiService;

/// The values of the three form inputs, serialized as the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormField {
    Name,
    Email,
    Message,
}

impl ContactFormData {
    /// The first empty field, if any. All fields are required before the
    /// form may be submitted.
    pub fn first_missing(&self) -> Option<ContactFormField> {
        [
            (ContactFormField::Name, &self.name),
            (ContactFormField::Email, &self.email),
            (ContactFormField::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }

    fn field_mut(&mut self, field: ContactFormField) -> &mut String {
        match field {
            ContactFormField::Name => &mut self.name,
            ContactFormField::Email => &mut self.email,
            ContactFormField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission of this form is still in flight.
    Suppressed,
    /// A required field is empty; nothing was sent.
    Incomplete(ContactFormField),
    /// The request finished, successfully or not.
    Completed(Toast),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl Toast {
    fn success() -> Self {
        Self {
            title: "Success!".into(),
            description: "Your message has been sent successfully.".into(),
            variant: ToastVariant::Default,
        }
    }

    fn error(description: String) -> Self {
        Self {
            title: "Error".into(),
            description,
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub icon: SubmitIcon,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitIcon {
    Mail,
    Hourglass,
}

/// A contact form with at most one submission in flight.
///
/// While a submission is being sent the whole form is disabled: field updates
/// are ignored and further submits are suppressed.
#[derive(Debug)]
pub struct ContactForm<Api> {
    api: Api,
    data: Mutex<ContactFormData>,
    sending: watch::Sender<bool>,
}

impl<Api> ContactForm<Api>
where
    Api: ContactApiService,
{
    pub fn new(api: Api) -> Self {
        Self {
            api,
            data: Mutex::default(),
            sending: watch::Sender::new(false),
        }
    }

    /// Update a field. Returns `false` if the form is disabled.
    pub fn set_field(&self, field: ContactFormField, value: impl Into<String>) -> bool {
        let mut data = self.data();
        if self.is_sending() {
            return false;
        }
        *data.field_mut(field) = value.into();
        true
    }

    pub fn fields(&self) -> ContactFormData {
        self.data().clone()
    }

    pub fn is_sending(&self) -> bool {
        *self.sending.borrow()
    }

    /// Observe the sending state, e.g. to re-render the form.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sending.subscribe()
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.is_sending() {
            SubmitButton {
                label: "Sending...",
                icon: SubmitIcon::Hourglass,
                disabled: true,
            }
        } else {
            SubmitButton {
                label: "Send Message",
                icon: SubmitIcon::Mail,
                disabled: false,
            }
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let (data, _sending) = {
            let data = self.data();
            if let Some(field) = data.first_missing() {
                return SubmitOutcome::Incomplete(field);
            }
            let Some(sending) = SendingGuard::acquire(&self.sending) else {
                return SubmitOutcome::Suppressed;
            };
            (data.clone(), sending)
        };

        let toast = match self.api.submit(data).await {
            Ok(()) => {
                *self.data() = ContactFormData::default();
                Toast::success()
            }
            Err(err) => {
                tracing::warn!("failed to submit contact form: {err}");
                Toast::error(err.to_string())
            }
        };

        SubmitOutcome::Completed(toast)
    }

    fn data(&self) -> MutexGuard<'_, ContactFormData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the sending flag and resets it when dropped, so the form is enabled
/// again on every exit path, including cancellation of the submit future.
struct SendingGuard<'a>(&'a watch::Sender<bool>);

impl<'a> SendingGuard<'a> {
    fn acquire(sending: &'a watch::Sender<bool>) -> Option<Self> {
        sending
            .send_if_modified(|sending| !std::mem::replace(sending, true))
            .then_some(Self(sending))
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}
