use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Cap on how much of a raw body is copied into error messages
const BODY_SNIPPET_LIMIT: usize = 400;

/// Errors that can occur when using the Channel3 clients
#[derive(Debug, Error)]
pub enum Channel3Error {
    /// Client could not be configured (e.g., no API key resolvable).
    /// Raised at construction only; no request was attempted.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Request rejected, either locally before any I/O (`status_code` is
    /// `None`) or by the server with a 4xx other than 401/403/404
    #[error("Validation error: {0}")]
    Validation(ApiErrorObject),

    /// Server rejected the credentials (401/403)
    #[error("Authentication error: {0}")]
    Authentication(ApiErrorObject),

    /// Requested resource does not exist (404)
    #[error("Not found{}: {error}", .resource_id.as_deref().map(|id| format!(" ({id})")).unwrap_or_default())]
    NotFound {
        /// Identifier that was requested, when the operation has one
        resource_id: Option<String>,
        /// Server-supplied error details
        error: ApiErrorObject,
    },

    /// Server failed to handle the request (5xx)
    #[error("Server error: {0}")]
    Server(ApiErrorObject),

    /// No HTTP response was obtained (timeout, DNS failure, refused connection)
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Error details carried by API-originated failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorObject {
    /// HTTP status code; `None` for errors raised before any request was sent
    pub status_code: Option<u16>,
    /// Human-readable error message
    pub detail: String,
}

impl ApiErrorObject {
    /// Creates an error object for a failure detected locally, without a status code
    #[must_use]
    pub fn local(detail: impl Into<String>) -> Self {
        Self {
            status_code: None,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ApiErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{} (HTTP {code})", self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

impl Channel3Error {
    /// Builds a local validation error for a rejected argument
    #[must_use]
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::Validation(ApiErrorObject::local(detail))
    }

    /// Returns the HTTP status code for server-originated errors
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Validation(obj) | Self::Authentication(obj) | Self::Server(obj) => {
                obj.status_code
            }
            Self::NotFound { error, .. } => error.status_code,
            Self::Connection(e) => e.status().map(|s| s.as_u16()),
            Self::Config(_) | Self::Serde(_) => None,
        }
    }

    /// Returns the server- or client-supplied detail message, when there is one
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Validation(obj) | Self::Authentication(obj) | Self::Server(obj) => {
                Some(&obj.detail)
            }
            Self::NotFound { error, .. } => Some(&error.detail),
            Self::Config(msg) | Self::Serde(msg) => Some(msg),
            Self::Connection(_) => None,
        }
    }

    /// Determines if a caller may reasonably retry the failed call
    ///
    /// The clients never retry on their own. Retryable errors are transport
    /// failures and server-side statuses (408, 409, 429, 5xx).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            _ => self
                .status_code()
                .is_some_and(crate::retry::is_retryable_status),
        }
    }
}

/// Maps a serde deserialization error to a `Channel3Error` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> Channel3Error {
    Channel3Error::Serde(format!("{e}: {}", snippet(body)))
}

fn snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(&body[..body.len().min(BODY_SNIPPET_LIMIT)]).into_owned()
}

/// Error envelope returned by the API
///
/// `detail` is a string for most errors and a list of field errors for
/// request-validation failures.
#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Extracts the human-readable detail from an error response body
///
/// Attempts to parse the body as JSON, falling back to plain text on failure.
#[must_use]
pub fn extract_detail(status: StatusCode, body: &[u8]) -> String {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        match envelope.detail {
            Some(serde_json::Value::String(s)) => return s,
            Some(serde_json::Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
        if let Some(message) = envelope.message {
            return message;
        }
    }

    let text = snippet(body);
    if text.trim().is_empty() {
        status
            .canonical_reason()
            .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
    } else {
        text
    }
}

/// Classifies a non-success response into the error taxonomy
///
/// `resource_id` is the identifier the request targeted, recorded on
/// [`Channel3Error::NotFound`].
#[must_use]
pub fn from_status(status: StatusCode, body: &[u8], resource_id: Option<&str>) -> Channel3Error {
    let error = ApiErrorObject {
        status_code: Some(status.as_u16()),
        detail: extract_detail(status, body),
    };

    match status.as_u16() {
        401 | 403 => Channel3Error::Authentication(error),
        404 => Channel3Error::NotFound {
            resource_id: resource_id.map(str::to_string),
            error,
        },
        400..=499 => Channel3Error::Validation(error),
        _ => Channel3Error::Server(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_used_verbatim() {
        let body = br#"{"detail":"Invalid API key"}"#;
        assert_eq!(
            extract_detail(StatusCode::UNAUTHORIZED, body),
            "Invalid API key"
        );
    }

    #[test]
    fn detail_list_is_rendered_as_json() {
        let body = br#"{"detail":[{"loc":["body","query"],"msg":"field required"}]}"#;
        let detail = extract_detail(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert!(detail.contains("field required"));
        assert!(detail.starts_with('['));
    }

    #[test]
    fn message_field_is_a_fallback() {
        let body = br#"{"message":"Rate limited"}"#;
        assert_eq!(
            extract_detail(StatusCode::TOO_MANY_REQUESTS, body),
            "Rate limited"
        );
    }

    #[test]
    fn plain_text_body_is_capped() {
        let body = "x".repeat(1000);
        let detail = extract_detail(StatusCode::BAD_GATEWAY, body.as_bytes());
        assert_eq!(detail.len(), BODY_SNIPPET_LIMIT);
    }

    #[test]
    fn empty_body_uses_reason_phrase() {
        assert_eq!(
            extract_detail(StatusCode::SERVICE_UNAVAILABLE, b""),
            "Service Unavailable"
        );
    }

    #[test]
    fn not_found_records_resource_id() {
        let err = from_status(
            StatusCode::NOT_FOUND,
            br#"{"detail":"Product not found"}"#,
            Some("nonexistent"),
        );
        match &err {
            Channel3Error::NotFound { resource_id, error } => {
                assert_eq!(resource_id.as_deref(), Some("nonexistent"));
                assert_eq!(error.detail, "Product not found");
                assert_eq!(error.status_code, Some(404));
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
        assert!(err.to_string().contains("(nonexistent)"));
    }

    #[test]
    fn local_validation_has_no_status() {
        let err = Channel3Error::invalid_argument("product_id cannot be empty");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.detail(), Some("product_id cannot be empty"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn server_errors_are_retryable_client_errors_are_not() {
        assert!(from_status(StatusCode::SERVICE_UNAVAILABLE, b"", None).is_retryable());
        assert!(from_status(StatusCode::TOO_MANY_REQUESTS, b"", None).is_retryable());
        assert!(!from_status(StatusCode::UNAUTHORIZED, b"", None).is_retryable());
        assert!(!from_status(StatusCode::NOT_FOUND, b"", None).is_retryable());
    }
}
