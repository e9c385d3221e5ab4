//! Error types for the apricot library.
//!
//! Failures of a single HTTP exchange are described by [`RequestError`].
//! The public operations wrap it in [`AuthenticationError`] (token exchange)
//! or [`FetchError`] (resource retrieval), and [`Error`] unifies everything.

use std::fmt;
use thiserror::Error;

use crate::auth::CredentialScheme;

/// The unified error type for apricot operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Both the primary and the fallback token exchange failed.
    #[error("authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// A page or single-resource request failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The HTTP client could not be constructed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Input validation errors (URL, account identifier).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Token exchange failure.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// The last attempted exchange failed. When a fallback was attempted this
    /// carries the fallback's failure; the primary failure is only logged.
    #[error("token exchange with {scheme} credentials failed: {source}")]
    Exchange {
        scheme: CredentialScheme,
        #[source]
        source: RequestError,
    },

    /// The selected scheme needs a client secret and none was supplied.
    #[error("{scheme} credentials require a client secret")]
    MissingSecret { scheme: CredentialScheme },
}

impl AuthenticationError {
    /// Returns the scheme of the attempt that produced this error.
    pub fn scheme(&self) -> CredentialScheme {
        match self {
            AuthenticationError::Exchange { scheme, .. } => *scheme,
            AuthenticationError::MissingSecret { scheme } => *scheme,
        }
    }
}

/// Resource retrieval failure. Pages fetched before the failure are discarded.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request for a page (or a single resource) failed.
    #[error("request for {resource} failed: {source}")]
    Request {
        resource: String,
        #[source]
        source: RequestError,
    },

    /// The response body did not contain the expected item collection.
    #[error("response for {resource} has no '{field}' collection")]
    MissingItems { resource: String, field: String },

    /// The server kept issuing continuation tokens past the page cap.
    #[error("pagination limit exceeded after {pages} pages")]
    PaginationLimitExceeded { pages: u32 },

    /// The aggregation ran longer than the configured time cap.
    #[error("pagination time limit exceeded after {pages} pages ({elapsed_ms}ms)")]
    PaginationTimeExceeded { pages: u32, elapsed_ms: u64 },
}

impl FetchError {
    /// Returns the server-provided error description, if the failing
    /// response carried one.
    pub fn description(&self) -> Option<&str> {
        match self {
            FetchError::Request {
                source: RequestError::Protocol(err),
                ..
            } => err.description.as_deref(),
            _ => None,
        }
    }
}

/// Failure of one HTTP exchange.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error("{0}")]
    Protocol(#[from] ProtocolError),

    /// A success response whose body could not be used.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

impl RequestError {
    /// True if the server rejected the presented credentials.
    pub fn is_credential_rejection(&self) -> bool {
        matches!(self, RequestError::Protocol(err) if err.is_auth_error())
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::MalformedResponse {
                message: err.to_string(),
            }
        } else {
            RequestError::Transport(TransportError::from(err))
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

/// A non-success response from the token endpoint or the API.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error code (OAuth `error` field), if present.
    pub error: Option<String>,
    /// Human readable description (`error_description` or `message`).
    pub description: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref description) = self.description {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, description: Option<String>) -> Self {
        Self {
            status,
            error,
            description,
        }
    }

    /// Check if the server rejected the credentials or token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status, 400 | 401 | 403)
            || self.error.as_deref() == Some("invalid_client")
            || self.error.as_deref() == Some("unauthorized_client")
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid service URL.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },

    /// Invalid account identifier.
    #[error("invalid account id '{value}': {reason}")]
    AccountId { value: String, reason: String },

    /// Invalid resource name.
    #[error("invalid resource '{value}': {reason}")]
    Resource { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display_includes_description() {
        let err = ProtocolError::new(
            400,
            Some("invalid_grant".to_string()),
            Some("Account is locked".to_string()),
        );
        assert_eq!(err.to_string(), "HTTP 400 [invalid_grant]: Account is locked");
    }

    #[test]
    fn protocol_error_display_status_only() {
        let err = ProtocolError::new(503, None, None);
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn fetch_error_exposes_server_description() {
        let err = FetchError::Request {
            resource: "accounts".to_string(),
            source: ProtocolError::new(401, None, Some("Token expired".to_string())).into(),
        };
        assert_eq!(err.description(), Some("Token expired"));
        assert!(err.to_string().contains("Token expired"));

        let err = FetchError::PaginationLimitExceeded { pages: 3 };
        assert_eq!(err.description(), None);
    }

    #[test]
    fn credential_rejection_excludes_server_errors() {
        let rejected: RequestError = ProtocolError::new(401, None, None).into();
        assert!(rejected.is_credential_rejection());

        let outage: RequestError = ProtocolError::new(502, None, None).into();
        assert!(!outage.is_credential_rejection());

        let malformed = RequestError::MalformedResponse {
            message: "missing access_token".to_string(),
        };
        assert!(!malformed.is_credential_rejection());
    }
}
