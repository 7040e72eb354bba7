use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Response is missing the 'data' field")]
    MissingData,

    #[error("Response 'data' field is empty")]
    EmptyData,

    #[error("Endpoint returned HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// True for the failures caused by the shape of the response body rather
    /// than the transport.
    pub fn is_payload_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::MissingData | Self::EmptyData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::config("bad url").to_string(),
            "Configuration error: bad url"
        );
        assert_eq!(
            Error::HttpStatus { status: 503 }.to_string(),
            "Endpoint returned HTTP status 503"
        );
        assert_eq!(
            Error::MissingData.to_string(),
            "Response is missing the 'data' field"
        );
    }

    #[test]
    fn test_payload_error_classification() {
        assert!(Error::MissingData.is_payload_error());
        assert!(Error::EmptyData.is_payload_error());
        assert!(Error::decode("not json").is_payload_error());
        assert!(!Error::config("x").is_payload_error());
        assert!(!Error::HttpStatus { status: 500 }.is_payload_error());
    }
}
