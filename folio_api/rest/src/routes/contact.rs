use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_models::contact::ContactSubmission;
use serde_json::error::Category;

use crate::{
    errors::{error, internal_server_error},
    models::{contact::ApiContactSubmission, ApiMessage},
};

pub const CONTACT_ROUTE: &str = "/api/contact";

const EMAIL_SENT: &str = "Email sent successfully";
const EMAIL_FAILED: &str = "Failed to send email. Please try again later.";
const INVALID_BODY: &str = "Invalid request body";

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route(CONTACT_ROUTE, routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match submit(&**service, body).await {
        Ok(()) => Json(ApiMessage {
            message: EMAIL_SENT,
        })
        .into_response(),
        Err(SubmitError::Invalid(message)) => error(StatusCode::BAD_REQUEST, message),
        Err(SubmitError::Provider) => error(StatusCode::INTERNAL_SERVER_ERROR, EMAIL_FAILED),
        Err(SubmitError::Unknown(err)) => internal_server_error(err),
    }
}

#[derive(Debug)]
enum SubmitError {
    /// Rejected input, with the message shown to the user.
    Invalid(String),
    Provider,
    Unknown(anyhow::Error),
}

async fn submit(
    service: &impl ContactService,
    body: Result<Bytes, BytesRejection>,
) -> Result<(), SubmitError> {
    let body = body.map_err(|rejection| {
        SubmitError::Unknown(anyhow!(
            "failed to read contact request body: {}",
            rejection.body_text()
        ))
    })?;

    // the content type is not checked, any body that parses as JSON is accepted
    let body = serde_json::from_slice::<ApiContactSubmission>(&body).map_err(|err| {
        match err.classify() {
            Category::Data => SubmitError::Invalid(INVALID_BODY.into()),
            Category::Syntax | Category::Eof | Category::Io => {
                SubmitError::Unknown(anyhow!("failed to parse contact request body: {err}"))
            }
        }
    })?;

    let submission = ContactSubmission::try_from(body)
        .map_err(|err| SubmitError::Invalid(err.to_string()))?;

    service
        .send_message(submission)
        .await
        .map_err(|err| match err {
            ContactSendMessageError::Send => SubmitError::Provider,
            ContactSendMessageError::Other(err) => SubmitError::Unknown(err),
        })
}
