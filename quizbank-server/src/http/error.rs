//! API error types with IntoResponse
//!
//! Every error becomes a JSON body `{"detail": "..."}` with the matching
//! status code. Handlers are the only place "absent" turns into 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use quizbank_core::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Write payload missing a required field (422)
    Validation(ValidationError),

    /// Path, query or body could not be parsed (422)
    InvalidRequest { message: String },

    /// Parameter parsed but outside its allowed range (422)
    Constraint { field: &'static str, message: &'static str },

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Known path, wrong method (405)
    MethodNotAllowed,

    /// Body rejected before parsing, e.g. wrong content type or too large
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn question_not_found() -> Self {
        Self::NotFound {
            resource: "Question",
        }
    }

    pub fn route_not_found() -> Self {
        Self::NotFound { resource: "Route" }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidRequest { .. } | Self::Constraint { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Rejected { status, .. } => *status,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::InvalidRequest { message } => message.clone(),
            Self::Constraint { field, message } => format!("{}: {}", field, message),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::MethodNotAllowed => "Method Not Allowed".to_string(),
            Self::Rejected { message, .. } => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        tracing::debug!(status = status.as_u16(), %detail, "request rejected");

        let body = json!({ "detail": detail });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_fixed_detail() {
        let response = ApiError::question_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Question not found"})
        );
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::from(ValidationError::MissingField { field: "text" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "field required: text"})
        );
    }

    #[tokio::test]
    async fn constraint_is_422_not_404() {
        let err = ApiError::Constraint {
            field: "n",
            message: "must be greater than or equal to 1",
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn method_not_allowed_is_405_json() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Method Not Allowed"})
        );
    }

    #[tokio::test]
    async fn rejected_keeps_its_status() {
        let err = ApiError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "body too large".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await, json!({"detail": "body too large"}));
    }
}
