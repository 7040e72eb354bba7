use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request envelope sent to `/run/predict`: `{"data": [message]}`.
///
/// The fixed-size array keeps the envelope at exactly one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    data: [String; 1],
}

impl PredictRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            data: [message.into()],
        }
    }

    pub fn message(&self) -> &str {
        &self.data[0]
    }
}

/// Status code and raw body text of one predict call.
///
/// The body is kept undecoded so the status can be reported before a
/// malformed body fails the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictResponse {
    pub status: u16,
    pub body: String,
}

impl PredictResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body)
            .map_err(|e| Error::decode(format!("response body is not valid JSON: {e}")))
    }

    /// The reply payload at `data[0]`.
    pub fn reply(&self) -> Result<Value> {
        let mut body = self.json()?;
        let data = body.get_mut("data").ok_or(Error::MissingData)?;
        match data.take() {
            Value::Array(items) => items.into_iter().next().ok_or(Error::EmptyData),
            other => Err(Error::decode(format!("'data' is not an array: {other}"))),
        }
    }
}

/// Structured view of the chat payload returned by the ElderCare backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub ai_response: String,
    pub emotion: Emotion,
    pub wellness_score: f64,
    pub safety_status: SafetyStatus,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Calm,
    Happy,
    Sad,
    Anxious,
    Confused,
    Angry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyStatus {
    pub level: SafetyLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub timestamp: String,
    pub user: String,
    pub ai: String,
}

impl ChatReply {
    /// Best-effort decode; `None` when the payload has some other shape.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        Self::deserialize(payload).ok()
    }

    pub fn summary(&self) -> String {
        format!(
            "emotion={:?} wellness_score={} safety={:?} history_len={}",
            self.emotion,
            self.wellness_score,
            self.safety_status.level,
            self.chat_history.len()
        )
    }
}
