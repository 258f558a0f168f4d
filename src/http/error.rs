//! Error mapping for the HTTP surface.
//!
//! Every failure leaves the service as `{"error": message}`; only the
//! missing-fields validation failure is a client error, everything else is
//! a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::OpiguardError;

/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Wrapper carrying a service error out of a handler.
#[derive(Debug)]
pub struct ApiError(OpiguardError);

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self.0 {
            OpiguardError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<OpiguardError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::warn!("Request rejected: {}", self.0);
        }
        (
            status,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EncodeError, MissingFields};

    #[test]
    fn test_missing_fields_is_bad_request() {
        let err = ApiError::from(MissingFields(vec!["Age".to_string()]));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_encoding_failure_is_server_error() {
        let err = ApiError::from(EncodeError::UnknownCategory {
            column: "Feverish".to_string(),
            value: "randomly".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
