use serde_json::{Map, Value};

use crate::client::http::TransportError;
use crate::domain::{ApiErrorKind, ValidationError};

/// Status reported when no HTTP response was received.
pub const NO_RESPONSE_STATUS: u16 = 500;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`AraraClient`](crate::AraraClient).
///
/// Every variant reports a status through [`AraraError::status_code`]: `0` for failures
/// detected locally, the HTTP status otherwise.
pub enum AraraError {
    /// One of the domain constructors rejected an invalid value. Nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API answered with a non-2xx status, or no response was received.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx response body was not a JSON object.
    #[error("invalid JSON response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The default HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl AraraError {
    /// HTTP status associated with this error, or `0` for local failures.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Api(err) => err.status(),
            Self::Decode { status, .. } => *status,
            Self::Validation(_) | Self::Encode(_) | Self::ClientBuild(_) => 0,
        }
    }

    /// The API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
/// Failure reported by the Arara API, keyed by HTTP status.
///
/// The message is the explicit override if given, else the non-empty string `message`
/// field of the response body, else `HTTP {status}`.
pub struct ApiError {
    kind: ApiErrorKind,
    status: u16,
    body: Option<Map<String, Value>>,
    message: String,
    #[source]
    transport: Option<TransportError>,
}

impl ApiError {
    /// Build an error for `status`, classifying it with [`ApiErrorKind::from_status`].
    pub fn new(status: u16, body: Option<Map<String, Value>>, message: Option<String>) -> Self {
        let message = message
            .filter(|it| !it.trim().is_empty())
            .or_else(|| body_message(body.as_ref()))
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            body,
            message,
            transport: None,
        }
    }

    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        Self::new(status, crate::transport::decode_error_body(body), None)
    }

    pub(crate) fn from_transport(err: TransportError) -> Self {
        Self {
            transport: Some(err),
            ..Self::new(NO_RESPONSE_STATUS, None, None)
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// HTTP status, or [`NO_RESPONSE_STATUS`] when no response was received.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response body, when it was a JSON object.
    pub fn body(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The transport failure, when no response was received.
    pub fn transport_error(&self) -> Option<&TransportError> {
        self.transport.as_ref()
    }

    /// Returns `true` if the request never got a response.
    pub fn is_no_response(&self) -> bool {
        self.transport.is_some()
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self.transport, Some(TransportError::Timeout(_)))
    }

    /// Returns `true` if sending the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        self.is_no_response() || self.status == 429 || self.status >= 500
    }

    /// Returns `true` if the API key was rejected.
    pub fn is_auth_error(&self) -> bool {
        self.kind == ApiErrorKind::Authentication
    }
}

fn body_message(body: Option<&Map<String, Value>>) -> Option<String> {
    body?
        .get("message")
        .and_then(Value::as_str)
        .filter(|it| !it.trim().is_empty())
        .map(str::to_owned)
}
