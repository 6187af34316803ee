use anyhow::Context;
use folio_utils::folio_version;

/// `User-Agent` sent with every request to an email provider API.
pub fn user_agent() -> String {
    format!(
        "folio/{} (+{})",
        folio_version(),
        env!("CARGO_PKG_REPOSITORY")
    )
}

pub fn client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(user_agent())
        .build()
        .context("Failed to build http client")
}
