use async_trait::async_trait;
use eldercare_probe::{
    Error, Result,
    probe::{PredictClient, PredictRequest, PredictResponse},
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted predict client: replays queued responses and records every request.
#[derive(Debug, Clone, Default)]
pub struct MockPredictClient {
    pub responses: Arc<Mutex<VecDeque<PredictResponse>>>,
    pub requests: Arc<Mutex<Vec<PredictRequest>>>,
}

impl MockPredictClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, status: u16, body: Value) -> Self {
        self.with_raw_response(status, body.to_string())
    }

    pub fn with_raw_response(self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(PredictResponse::new(status, body));
        self
    }

    pub fn get_requests(&self) -> Vec<PredictRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictClient for MockPredictClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        self.requests.lock().unwrap().push(request.clone());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::decode("No mock responses configured"))
    }
}
