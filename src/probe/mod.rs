mod client;
mod types;

pub use client::{HttpPredictClient, PredictClient};
pub use types::{
    ChatReply, ChatTurn, Emotion, PredictRequest, PredictResponse, SafetyLevel, SafetyStatus,
};

use crate::{Error, Result, config::Config};
use std::io::Write;
use tracing::{debug, info, warn};

/// Sends messages to the predict endpoint and prints each status and reply.
pub struct Probe {
    client: Box<dyn PredictClient>,
    fail_on_http_error: bool,
}

impl Probe {
    pub fn new(client: Box<dyn PredictClient>) -> Self {
        Self {
            client,
            fail_on_http_error: false,
        }
    }

    pub fn with_fail_on_http_error(mut self, enabled: bool) -> Self {
        self.fail_on_http_error = enabled;
        self
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpPredictClient::new(config.endpoint_url()?);
        info!("Probing endpoint {}", client.url());

        Ok(Self::new(Box::new(client)).with_fail_on_http_error(config.probe.fail_on_http_error))
    }

    /// One request/response cycle: prints `Status Code: <n>` and then the
    /// pretty-printed `data[0]` of the response. The status line is written
    /// before the body is decoded, so it is reported even for non-JSON bodies.
    ///
    /// A non-2xx status is logged and the payload is still printed, unless
    /// strict mode is on.
    pub async fn test_api<W: Write>(&self, message: &str, out: &mut W) -> Result<()> {
        let request = PredictRequest::new(message);
        let response = self.client.predict(&request).await?;

        writeln!(out, "Status Code: {}", response.status)?;
        out.flush()?;

        if !response.is_success() {
            if self.fail_on_http_error {
                return Err(Error::HttpStatus {
                    status: response.status,
                });
            }
            warn!(
                "Endpoint returned status {}, printing payload anyway",
                response.status
            );
        }

        let reply = response.reply()?;
        if let Some(chat) = ChatReply::from_payload(&reply) {
            debug!("Chat reply: {}", chat.summary());
        }

        writeln!(out, "{}", serde_json::to_string_pretty(&reply)?)?;
        out.flush()?;

        Ok(())
    }

    /// Runs `test_api` for each message in order, stopping at the first failure.
    pub async fn run<W: Write>(&self, messages: &[String], out: &mut W) -> Result<()> {
        info!("Sending {} message(s)", messages.len());

        for (i, message) in messages.iter().enumerate() {
            debug!("Message {}/{}", i + 1, messages.len());
            if let Err(e) = self.test_api(message, out).await {
                if e.is_payload_error() {
                    warn!("Message {} got an unusable response body: {}", i + 1, e);
                }
                return Err(e);
            }
        }

        Ok(())
    }
}
