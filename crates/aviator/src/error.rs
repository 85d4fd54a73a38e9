//! Error types for aviator.
//!
//! Two layers live here: [`Error`] covers process-level failures (configuration,
//! sockets, client construction), while [`ApiError`] is the closed set of
//! failures an HTTP endpoint can answer with.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// The main error type for aviator operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Server Errors ===
    /// Failed to bind the HTTP listener.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address the server tried to listen on.
        address: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The outbound HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    // === I/O Errors ===
    /// Socket or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for aviator operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}

/// Failures an API endpoint reports to its caller.
///
/// Each kind maps to exactly one HTTP status in [`ApiError::status`]; the
/// response body is always `{"error": "<message>"}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Coordinates were missing or did not parse as finite numbers.
    #[error("Invalid or missing lat/lon")]
    InvalidInput,

    /// No address text was supplied.
    #[error("Address is required")]
    MissingInput,

    /// The geocoding service returned no match.
    #[error("Location not found")]
    NotFound,

    /// The outbound geocoding call failed at the transport or protocol level.
    #[error("API request failed: {0}")]
    RelayFailure(String),

    /// Any other failure while relaying.
    #[error("{0}")]
    UnexpectedFailure(String),
}

impl ApiError {
    /// HTTP status code for this error kind.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::MissingInput => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::RelayFailure(_) | Self::UnexpectedFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config_validation("timeout_secs must be greater than 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: timeout_secs must be greater than 0"
        );
    }

    #[test]
    fn test_bind_error_display() {
        let err = Error::Bind {
            address: "127.0.0.1:5000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:5000"));
        assert!(msg.contains("address in use"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_api_error_status_mapping() {
        assert_eq!(ApiError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::RelayFailure("timeout".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::UnexpectedFailure("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::InvalidInput.to_string(),
            "Invalid or missing lat/lon"
        );
        assert_eq!(ApiError::MissingInput.to_string(), "Address is required");
        assert_eq!(ApiError::NotFound.to_string(), "Location not found");
        assert_eq!(
            ApiError::RelayFailure("connection refused".into()).to_string(),
            "API request failed: connection refused"
        );
        assert_eq!(
            ApiError::UnexpectedFailure("bad lat".into()).to_string(),
            "bad lat"
        );
    }

    #[tokio::test]
    async fn test_api_error_into_response() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Location not found");
    }
}
