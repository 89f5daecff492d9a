//! Error taxonomy shared by every API operation.

use bytes::Bytes;
use derive_more::{Display, Error, From};
use serde::Deserialize;

/// Reason reported when a non-2xx response does not carry the wire error shape.
pub const UNKNOWN_ERROR_REASON: &str = "UNKNOWN_ERROR";

// ============================================================================
// API Error
// ============================================================================

/// Structured error returned by the API.
///
/// Every endpoint reports failures in the same wire shape:
///
/// ```json
/// {"errorCode": 404, "error": "RESOURCE_NOT_FOUND", "detail": "no such cluster"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Numeric error code; inherits the HTTP status when the body omits it.
    #[serde(rename = "errorCode", default)]
    pub code: u16,
    /// Machine-readable reason, e.g. `RESOURCE_NOT_FOUND`.
    #[serde(rename = "error")]
    pub reason: String,
    /// Human-readable detail message.
    #[serde(default)]
    pub detail: String,
    /// Positional parameters the server interpolated into `detail`.
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Raw response body, kept for diagnostics.
    #[serde(skip)]
    pub raw: Option<Bytes>,
}

impl ApiError {
    /// Build an [`ApiError`] from a non-2xx response.
    ///
    /// The body is decoded as the wire error shape when possible; otherwise an
    /// error with reason [`UNKNOWN_ERROR_REASON`] is synthesized from the
    /// status code. The raw body is preserved either way.
    #[must_use]
    pub fn from_response(status: u16, body: Bytes) -> Self {
        match serde_json::from_slice::<Self>(&body) {
            Ok(mut parsed) => {
                if parsed.code == 0 {
                    parsed.code = status;
                }
                parsed.raw = Some(body);
                parsed
            }
            Err(_) => Self {
                code: status,
                reason: UNKNOWN_ERROR_REASON.to_owned(),
                detail: String::new(),
                parameters: Vec::new(),
                raw: Some(body),
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API error {} ({})", self.code, self.reason)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for client operations.
///
/// Callers always receive either a fully typed success value or exactly one
/// of these variants; the engine never swallows or rewrites a failure.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The configured base URL is unparseable or not absolute.
    #[display("invalid base URL: {_0}")]
    #[from(skip)]
    InvalidBaseUrl(#[error(not(source))] String),

    /// A relative path could not be resolved, e.g. an unbound placeholder.
    #[display("invalid path '{path}': {reason}")]
    #[from(skip)]
    InvalidPath {
        /// The offending path or template.
        path: String,
        /// Why it could not be resolved.
        reason: String,
    },

    /// A request payload could not be serialized.
    #[display("encoding error: {_0}")]
    #[from(skip)]
    Encoding(#[error(not(source))] String),

    /// A response body could not be deserialized into the expected shape.
    #[display("decoding error at '{path}': {message}")]
    #[from(skip)]
    Decoding {
        /// Path to the offending field (e.g. `results[0].groupId`).
        path: String,
        /// Underlying deserializer message.
        message: String,
    },

    /// The transport failed to deliver the request (network failure, timeout).
    #[display("transport error: {_0}")]
    #[from(skip)]
    Transport(#[error(not(source))] String),

    /// The caller's cancellation signal fired before the request completed.
    #[display("request cancelled")]
    #[from(skip)]
    Cancelled,

    /// The server answered with a structured API error.
    #[display("{_0}")]
    Api(#[error(not(source))] ApiError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid base URL error.
    #[must_use]
    pub fn invalid_base_url(message: impl Into<String>) -> Self {
        Self::InvalidBaseUrl(message.into())
    }

    /// Create an invalid path error.
    #[must_use]
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a decoding error with path context.
    #[must_use]
    pub fn decoding(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decoding {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Returns `true` if the operation was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` if this is a transport-level failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the structured API error, if any.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the API error code if the server reported one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|err| err.code)
    }

    /// Returns `true` if the server reported a 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<serde_html_form::ser::Error> for Error {
    fn from(err: serde_html_form::ser::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
