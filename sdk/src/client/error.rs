//! Client error types.
//!
//! Every failed call surfaces as a [`ClientError`]. HTTP error statuses
//! become [`ClientError::Api`]; every other transport failure becomes
//! [`ClientError::Network`].

use serde_json::Value;

/// Fallback message when an error body carries no `message` field.
pub const DEFAULT_API_ERROR_MESSAGE: &str = "API error";

/// Code reported by [`ClientError::code`] for network failures.
pub const NETWORK_ERROR_CODE: &str = "NETWORK_ERROR";

/// Error returned by the EDUZEN API for an HTTP error status.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("API error [{code}]: {message}")]
pub struct ApiError {
    /// Human-readable message.
    pub message: String,

    /// Machine-readable error code, `HTTP_<status>` when the server sent none.
    pub code: String,

    /// HTTP status of the response.
    pub status_code: Option<u16>,

    /// Extra payload from the error body, if any.
    pub details: Option<Value>,
}

impl ApiError {
    /// Builds an error from a decoded error body.
    ///
    /// Missing or non-string `message`/`code` fields fall back to the
    /// defaults; a `null` `details` is treated as absent.
    #[must_use]
    pub fn from_body(status: u16, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_API_ERROR_MESSAGE)
            .to_string();
        let code = body
            .get("code")
            .and_then(Value::as_str)
            .map_or_else(|| status_code_label(status), str::to_string);
        let details = body.get("details").filter(|v| !v.is_null()).cloned();

        Self {
            message,
            code,
            status_code: Some(status),
            details,
        }
    }

    /// Builds an error for a response whose body is not JSON.
    #[must_use]
    pub fn undecodable(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: status_code_label(status),
            status_code: Some(status),
            details: None,
        }
    }
}

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API answered with an HTTP error status.
    #[error(transparent)]
    Api(ApiError),

    /// The request failed before an HTTP status was obtained, or the
    /// response could not be read or decoded.
    #[error("network error: {message}")]
    Network {
        /// String form of the underlying transport error.
        message: String,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Request parameters could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ClientError {
    /// Creates a network error from any displayable transport error.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }

    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Api(err) => &err.code,
            Self::Network { .. } => NETWORK_ERROR_CODE,
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns the bare error message, without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Api(err) => &err.message,
            Self::Network { message } => message,
            Self::InvalidConfig(msg) | Self::Serialization(msg) => msg,
        }
    }

    /// Returns the HTTP status for API errors.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => err.status_code,
            _ => None,
        }
    }

    /// Returns the error details for API errors.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::Api(err) => err.details.as_ref(),
            _ => None,
        }
    }

    /// Returns true for HTTP error statuses.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns true for transport failures.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err)
    }
}

fn status_code_label(status: u16) -> String {
    format!("HTTP_{}", status)
}
