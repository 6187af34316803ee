use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use folio_models::{email_address::EmailAddressWithName, Sensitive};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon-separated list of additional config files, applied in order on top
/// of the default config.
pub const CONFIG_PATHS_VAR: &str = "FOLIO_CONFIG";

/// Prefix of environment variables overriding single config values, e.g.
/// `FOLIO__EMAIL__SENDGRID__API_KEY`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Load the default config, the files listed in `FOLIO_CONFIG` and any
/// `FOLIO__*` environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(extra) = std::env::var_os(CONFIG_PATHS_VAR) {
        paths.extend(std::env::split_paths(&extra));
    }

    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true);

    load_paths(&paths)
        .and_then(|builder| builder.add_source(environment).build().map_err(Into::into))
        .and_then(deserialize)
}

/// Load and merge the given config files without looking at the environment.
pub fn load_files(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_paths(paths)
        .and_then(|builder| builder.build().map_err(Into::into))
        .and_then(deserialize)
}

fn load_paths(
    paths: &[impl AsRef<Path>],
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })
}

fn deserialize(config: config::Config) -> anyhow::Result<Config> {
    config.try_deserialize().context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,
    /// Sender of all outgoing emails. Must be verified with the provider.
    pub from: EmailAddressWithName,
    pub sendgrid: Option<SendGridConfig>,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    SendGrid,
    Smtp,
}

#[derive(Debug, Deserialize)]
pub struct SendGridConfig {
    pub api_key: Sensitive<String>,
    pub api_url: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub url: Sensitive<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Destination of contact form submissions.
    pub email: EmailAddressWithName,
}
