//! Error type returned by the API client.

use serde::Deserialize;

use super::transport::TransportError;

/// Optional fields of a JSON error payload (`{"message": ..., "code": ...}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorBody {
    /// Parse an error payload; anything that is not the expected JSON object
    /// yields an empty body.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Status { status: u16, body: ErrorBody },
    #[error("network error: {0}")]
    Network(#[from] TransportError),
    #[error("invalid response payload: {0}")]
    Decode(String),
    #[error("invalid request payload: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message, when present.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.message.as_deref(),
            _ => None,
        }
    }

    /// Server-provided machine-readable code, when present.
    #[must_use]
    pub fn server_code(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.code.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
