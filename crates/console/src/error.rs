//! Unified error handling for the console.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::ApiError;

/// Application-level error type for the console.
///
/// Section fetch failures degrade into in-page error text and action failures
/// redirect with a danger notice, so this type only carries the failures with
/// no page left to render on: template render errors and upstream failures
/// surfaced through `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Platform API call failed.
    #[error("Platform API error: {0}")]
    Api(#[from] ApiError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Console request error"
        );

        let status = match &self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Api(_) => StatusCode::BAD_GATEWAY,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error",
            Self::Api(_) => "Platform API error",
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Internal("render failed".to_string());
        assert_eq!(err.to_string(), "Internal error: render failed");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Api(ApiError::NotFound("test".to_string()))),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_api_error_converts_via_from() {
        let err = AppError::from(ApiError::Unauthorized);
        assert!(matches!(err, AppError::Api(ApiError::Unauthorized)));
    }

    #[test]
    fn test_api_errors_do_not_leak_details() {
        let err = AppError::Api(ApiError::Api {
            status: 500,
            message: "stack trace with internals".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
