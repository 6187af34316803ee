//! A fake of the parts of the SendGrid v3 API used by the backend.

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use uuid::Uuid;

pub const MAIL_SEND_ROUTE: &str = "/v3/mail/send";
pub const SCOPES_ROUTE: &str = "/v3/scopes";

/// Messages accepted by the fake server, in the order they were received.
#[derive(Debug, Clone, Default)]
pub struct Outbox(Arc<Mutex<Vec<SentMessage>>>);

impl Outbox {
    pub async fn messages(&self) -> Vec<SentMessage> {
        self.0.lock().await.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub personalizations: Vec<Personalization>,
    pub from: Address,
    pub reply_to: Option<Address>,
    pub subject: String,
    pub content: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personalization {
    pub to: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    outbox: Outbox,
}

pub fn router(api_key: &str, outbox: Outbox) -> Router<()> {
    Router::new()
        .route(MAIL_SEND_ROUTE, routing::post(mail_send))
        .route(SCOPES_ROUTE, routing::get(scopes))
        .with_state(AppState {
            api_key: api_key.into(),
            outbox,
        })
}

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting fake SendGrid server on {host}:{port}");
    info!("Mail send endpoint: http://{host}:{port}{MAIL_SEND_ROUTE}");
    info!("Api key: {api_key:?}");

    let router = router(&api_key, Outbox::default());

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

/// Start the fake server on a random local port in the background.
pub async fn spawn(api_key: &str) -> anyhow::Result<(SocketAddr, Outbox)> {
    let outbox = Outbox::default();
    let router = router(api_key, outbox.clone());

    let listener = TcpListener::bind((IpAddr::from([127, 0, 0, 1]), 0))
        .await
        .context("Failed to bind to a local port")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok((addr, outbox))
}

async fn mail_send(
    state: State<AppState>,
    headers: HeaderMap,
    Json(message): Json<SentMessage>,
) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }

    if message.personalizations.iter().all(|p| p.to.is_empty()) || message.content.is_empty() {
        return error(
            StatusCode::BAD_REQUEST,
            "The personalizations and content fields are required",
        );
    }

    let recipients = message
        .personalizations
        .iter()
        .flat_map(|p| p.to.iter().map(|to| to.email.as_str()))
        .collect::<Vec<_>>();
    info!(subject = %message.subject, ?recipients, "Received message");

    state.outbox.0.lock().await.push(message);

    (
        StatusCode::ACCEPTED,
        [("X-Message-Id", Uuid::now_v7().simple().to_string())],
    )
        .into_response()
}

async fn scopes(state: State<AppState>, headers: HeaderMap) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }

    Json(json!({"scopes": ["mail.send"]})).into_response()
}

fn authorized(state: &AppState, headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|key| key == &*state.api_key)
}

fn unauthorized() -> Response {
    error(
        StatusCode::UNAUTHORIZED,
        "The provided authorization grant is invalid, expired, or revoked",
    )
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({"errors": [{"message": message, "field": null, "help": null}]})),
    )
        .into_response()
}
