//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use zonewall_core::error::DomainError;

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements
/// `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::ClockLimitReached { .. } => (StatusCode::CONFLICT, "limit_reached"),
            DomainError::UnknownTimezone(_) => (StatusCode::BAD_REQUEST, "unknown_timezone"),
            DomainError::InvalidTimeInput(_) => (StatusCode::BAD_REQUEST, "invalid_time_input"),
            DomainError::InvalidIndex(_) => (StatusCode::BAD_REQUEST, "invalid_index"),
            DomainError::LocalClockImmutable => {
                (StatusCode::BAD_REQUEST, "local_clock_immutable")
            }
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            DomainError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: DomainError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_limit_reached_maps_to_409() {
        assert_eq!(
            status_of(DomainError::ClockLimitReached { limit: 8 }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_invalid_time_input_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InvalidTimeInput("nope".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unknown_timezone_maps_to_400() {
        assert_eq!(
            status_of(DomainError::UnknownTimezone("Mars/Base".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_infrastructure_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Infrastructure("disk gone".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
