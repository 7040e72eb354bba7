mod types;

pub use types::*;

use crate::{Error, Result};
use reqwest::Url;
use std::{io::ErrorKind, path::Path};
use tracing::debug;

/// A missing file yields the built-in defaults; any other read or parse
/// failure is an error.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => parse(&config_str),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not an empty mapping.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

impl Config {
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.endpoint.url = url;
        }
        self
    }

    /// Positional messages replace the configured list only when non-empty;
    /// the strict flag can only switch strict mode on.
    pub fn with_cli_overrides(mut self, messages: Vec<String>, fail_on_http_error: bool) -> Self {
        if !messages.is_empty() {
            self.probe.messages = messages;
        }
        if fail_on_http_error {
            self.probe.fail_on_http_error = true;
        }
        self
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        let raw = self.endpoint.url.trim();
        if raw.contains(URL_PLACEHOLDER) {
            return Err(Error::config(format!(
                "endpoint URL still contains the {URL_PLACEHOLDER} placeholder: {raw} \
                 (set endpoint.url, PROBE_API_URL or --url)"
            )));
        }

        let url = Url::parse(raw)
            .map_err(|e| Error::config(format!("invalid endpoint URL '{raw}': {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::config(format!(
                "unsupported endpoint URL scheme '{scheme}': {raw}"
            ))),
        }
    }
}
