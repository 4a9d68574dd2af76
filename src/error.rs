//! Error types for the Mercado Pago client.

use std::fmt;

use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building a [`Config`](crate::Config).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The access token is empty or cannot be sent as a bearer credential.
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// The base URL override could not be used as an API root.
    #[error("invalid base url `{url}`: {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An identifier cannot be sent as the value of its header.
    #[error("invalid value for header `{name}`")]
    InvalidHeader {
        /// The header the value was meant for.
        name: &'static str,
    },
}

/// Errors produced by an [`HttpClient`](crate::HttpClient) backend.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The remote host could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// Any other backend failure.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Everything a client call can fail with.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] HttpClientError),

    /// The request URL could not be built from its template.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(Box<ApiError>),

    /// The request body could not be encoded as JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A 2xx response body did not match the expected shape.
    #[error("failed to decode response body (HTTP {status}): {source}")]
    Decode {
        /// Status of the response that failed to decode.
        status: StatusCode,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Returns `true` if the request failed before any response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if the API answered with an error envelope.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The API error, if this is one.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status associated with the failure, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(e: ApiError) -> Self {
        Self::Api(Box::new(e))
    }
}

/// A non-2xx response from the API.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Response headers, kept for request-id lookups.
    pub headers: HeaderMap,
    /// The decoded error body.
    pub envelope: ErrorEnvelope,
}

impl ApiError {
    /// Decode an error response body.
    ///
    /// Bodies that are not a JSON error envelope are wrapped into one, with the
    /// raw text as the message.
    pub(crate) fn from_parts(status: StatusCode, headers: HeaderMap, body: &[u8]) -> Self {
        let envelope = serde_json::from_slice::<ErrorEnvelope>(body).unwrap_or_else(|_| {
            ErrorEnvelope {
                message: String::from_utf8_lossy(body).into_owned(),
                error: status
                    .canonical_reason()
                    .unwrap_or_default()
                    .to_lowercase()
                    .replace(' ', "_"),
                status: status.as_u16(),
                cause: Vec::new(),
            }
        });
        Self {
            status,
            headers,
            envelope,
        }
    }

    /// Human-readable message from the envelope.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.envelope.message
    }

    /// Per-field causes reported by the API.
    #[must_use]
    pub fn causes(&self) -> &[ErrorCause] {
        &self.envelope.cause
    }

    /// The `x-request-id` response header, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API returned HTTP {}", self.status.as_u16())?;
        if !self.envelope.error.is_empty() {
            write!(f, " ({})", self.envelope.error)?;
        }
        if !self.envelope.message.is_empty() {
            write!(f, ": {}", self.envelope.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// The JSON body the API returns on failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorEnvelope {
    /// Human-readable description.
    pub message: String,
    /// Machine-readable error name, e.g. `bad_request`.
    pub error: String,
    /// HTTP status as reported in the body.
    pub status: u16,
    /// Per-field causes.
    #[serde(deserialize_with = "null_as_empty")]
    pub cause: Vec<ErrorCause>,
}

/// A single cause inside an [`ErrorEnvelope`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorCause {
    /// Cause code. The API sends either a number or a string.
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    /// Description of the cause.
    pub description: String,
    /// Extra context attached to the cause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ErrorCause>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ErrorCause>>::deserialize(deserializer)?.unwrap_or_default())
}
