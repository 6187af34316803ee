use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
}

pub fn error(code: StatusCode, error: impl Into<String>) -> Response {
    (
        code,
        Json(ApiError {
            error: error.into(),
        }),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}
