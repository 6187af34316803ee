use serde::Serialize;

pub mod contact;

/// Acknowledgment returned by successful requests.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}
