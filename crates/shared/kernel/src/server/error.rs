use super::state::ApiStateError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use utoipa::ToSchema;

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable code (`NOT_FOUND`, `VALIDATION_ERROR`, ...).
    pub code: String,
    pub message: String,
    /// Structured context, only ever sent for client errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// An error on its way to becoming an HTTP response.
///
/// Messages of 5xx errors are logged and replaced with a generic text.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: Cow<'static, str>,
    details: Option<serde_json::Value>,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(
        status: StatusCode,
        code: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { status, code, message: message.into(), details: None }
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, details) = if self.status.is_server_error() {
            tracing::error!(code = self.code, error = %self.message, "Request failed");
            (Cow::Borrowed("An internal error occurred"), None)
        } else {
            (self.message, self.details)
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code.to_owned(),
                message: message.into_owned(),
                details,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        Self::internal(err.to_string())
    }
}

/// Unwraps a JSON body, turning any rejection into a 422 error body.
///
/// Handlers take `Result<Json<T>, JsonRejection>` so malformed payloads get
/// the same error shape as every other failure.
///
/// # Errors
///
/// Returns a `VALIDATION_ERROR` carrying the rejection text.
pub fn extract_json<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(payload)| payload).map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_BODY", rejection.body_text())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(err: ApiError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn client_errors_keep_message_and_details() {
        let err = ApiError::validation("Please fill in all required fields")
            .with_details(serde_json::json!({ "field": "name" }));
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert_eq!(body.error.message, "Please fill in all required fields");
        assert_eq!(body.error.details.unwrap()["field"], "name");
    }

    #[tokio::test]
    async fn server_errors_hide_message() {
        let err = ApiError::internal("lock poisoned").with_details(serde_json::json!([1]));
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.message, "An internal error occurred");
        assert!(body.error.details.is_none());
    }

    #[test]
    fn display_names_code_and_status() {
        assert_eq!(ApiError::not_found("Pet 4").to_string(), "NOT_FOUND (404): Pet 4");
    }
}
