use std::error::Error as StdError;

use thiserror::Error;

use crate::constants::{AUTHENTICATION_ERROR_MESSAGE_DETAIL, RATE_LIMIT_ERROR_MESSAGE_DETAIL};
use crate::http::ApiErrorBody;

/// Coarse classification of a [`ClientError`].
///
/// `Base` groups every failure that did not come from an HTTP status:
/// timeouts, transport failures, undecodable bodies and invalid local input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    RateLimit,
    Api,
    Base,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limit error: {0}")]
    RateLimit(String),

    #[error("API error (HTTP {status_code}): {message}")]
    Api {
        status_code: u16,
        message: String,
        body: String,
    },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Authentication(_) => ErrorKind::Authentication,
            ClientError::RateLimit(_) => ErrorKind::RateLimit,
            ClientError::Api { .. } => ErrorKind::Api,
            ClientError::Timeout(_)
            | ClientError::InvalidInput(_)
            | ClientError::Network(_)
            | ClientError::Serialization(_) => ErrorKind::Base,
        }
    }

    /// HTTP status behind this error, if it came from a response.
    ///
    /// An authentication error raised locally (bad key at construction) has no
    /// status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api { status_code, .. } => Some(*status_code),
            ClientError::RateLimit(_) => Some(429),
            _ => None,
        }
    }

    pub fn is_authentication_error(&self) -> bool {
        self.kind() == ErrorKind::Authentication
    }

    pub fn is_rate_limit_error(&self) -> bool {
        self.kind() == ErrorKind::RateLimit
    }

    pub fn is_api_error(&self) -> bool {
        self.kind() == ErrorKind::Api
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout(_))
    }

    /// Map a non-success HTTP status and its raw body to an error.
    ///
    /// 401 and 429 win over the generic API error. The message comes from the
    /// error envelope when the body parses as one.
    pub fn from_status(status_code: u16, body: String) -> Self {
        let envelope_message = ApiErrorBody::parse(&body).and_then(|b| b.display_message());
        match status_code {
            401 => ClientError::Authentication(
                envelope_message.unwrap_or_else(|| AUTHENTICATION_ERROR_MESSAGE_DETAIL.to_string()),
            ),
            429 => ClientError::RateLimit(
                envelope_message.unwrap_or_else(|| RATE_LIMIT_ERROR_MESSAGE_DETAIL.to_string()),
            ),
            _ => ClientError::Api {
                status_code,
                message: envelope_message
                    .unwrap_or_else(|| format!("API request failed with status {}", status_code)),
                body,
            },
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(e) = source {
            message.push_str(&format!("\n  caused by: {}", e));
            source = e.source();
        }

        if err.is_timeout() {
            ClientError::Timeout(message)
        } else if err.is_decode() {
            ClientError::Serialization(message)
        } else {
            ClientError::Network(message)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}
