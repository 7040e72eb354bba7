use super::types::{PredictRequest, PredictResponse};
use crate::Result;
use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

#[async_trait]
pub trait PredictClient: Send + Sync {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse>;
}

/// reqwest-backed client for a Gradio `/run/predict` endpoint.
///
/// No timeout is set, so a call blocks until the remote answers or the
/// connection fails.
pub struct HttpPredictClient {
    client: reqwest::Client,
    url: Url,
}

impl HttpPredictClient {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl PredictClient for HttpPredictClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        debug!(
            "POST {} with message of {} chars",
            self.url,
            request.message().chars().count()
        );

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!("Received status {} with {} byte body", status, text.len());

        Ok(PredictResponse::new(status, text))
    }
}
