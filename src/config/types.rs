use serde::{Deserialize, Serialize};

/// Placeholder left in the default endpoint until a real Space is configured.
pub const URL_PLACEHOLDER: &str = "[YourUsername]";

pub const DEFAULT_MESSAGES: [&str; 2] = ["Hello, how are you?", "I am feeling a little sad today."];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_url")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,
    /// Treat a non-2xx status as a failure instead of printing the payload anyway.
    #[serde(default)]
    pub fail_on_http_error: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            messages: default_messages(),
            fail_on_http_error: false,
        }
    }
}

fn default_url() -> String {
    format!("https://{URL_PLACEHOLDER}-eldercare-api.hf.space/run/predict")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_messages() -> Vec<String> {
    DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect()
}
