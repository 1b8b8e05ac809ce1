//! Response types for the timesheet report API.
//!
//! This module defines the error response structures and the mapping from
//! [`ReportError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::SourceUnavailable { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "SOURCE_UNAVAILABLE",
                    "Time entry source unavailable",
                    message,
                ),
            },
            ReportError::MalformedPayload { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::malformed_json(message),
            },
            ReportError::MalformedRecord { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_RECORD",
                    format!("Malformed time entry field '{}'", field),
                    message,
                ),
            },
            ReportError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            ReportError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            ReportError::RenderFailure { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("RENDER_FAILURE", "Failed to render report", message),
            },
            ReportError::OutputWrite { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "OUTPUT_ERROR",
                    format!("Failed to write '{}'", path),
                    message,
                ),
            },
            ReportError::ServerError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("SERVER_ERROR", "Internal server error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_source_unavailable_is_bad_gateway() {
        let response: ApiErrorResponse = ReportError::SourceUnavailable {
            message: "status 503".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(response.error.code, "SOURCE_UNAVAILABLE");
        assert_eq!(response.error.details.as_deref(), Some("status 503"));
    }

    #[test]
    fn test_malformed_payload_is_bad_request() {
        let response: ApiErrorResponse = ReportError::MalformedPayload {
            message: "expected an array".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_error_response_into_response() {
        let response = ApiErrorResponse::from(ReportError::SourceUnavailable {
            message: "status 503".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "SOURCE_UNAVAILABLE");
        assert_eq!(error.details.as_deref(), Some("status 503"));
    }

    #[test]
    fn test_render_failure_is_internal_error() {
        let response: ApiErrorResponse = ReportError::RenderFailure {
            message: "canvas too small".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "RENDER_FAILURE");
    }
}
