use std::future::Future;

use anyhow::Context;
use folio_utils::folio_version;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::form::ContactFormData;

pub const FALLBACK_ERROR: &str = "Failed to send message";

#[cfg_attr(test, mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Post the form fields to the contact endpoint.
    fn submit(
        &self,
        data: ContactFormData,
    ) -> impl Future<Output = Result<(), ContactApiError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    /// The endpoint answered with a non-success status. Contains the message
    /// it provided, or a generic one.
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to send message")]
    Network(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    client: reqwest::Client,
    endpoint: Url,
}

impl ContactApiServiceImpl {
    pub fn new(endpoint: Url) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("Folio contact form (Version {})", folio_version()))
            .build()
            .context("Failed to build http client")?;

        Ok(Self { client, endpoint })
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(&self, data: ContactFormData) -> Result<(), ContactApiError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&data)
            .send()
            .await
            .map_err(ContactApiError::Network)?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR.into());
        tracing::debug!(%status, %message, "contact endpoint rejected submission");

        Err(ContactApiError::Rejected(message))
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}
