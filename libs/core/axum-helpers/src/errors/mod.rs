pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every failure is reported to clients as a single `error` string. Internal
/// details are logged, never serialized.
///
/// # JSON Example
///
/// ```json
/// { "error": "Usuario no encontrado" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Client errors carry their message to the response body. Server errors
/// are logged with an [`ErrorCode`] and answered with
/// [`messages::INTERNAL_ERROR`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::InvalidId(_) | AppError::InvalidBody(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Status { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::Database(e) => {
                let code = database_error_code(&e);
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                messages::INTERNAL_ERROR.to_string()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                messages::INTERNAL_ERROR.to_string()
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), "Invalid id: {}", raw);
                messages::INVALID_ID.to_string()
            }
            AppError::InvalidBody(detail) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidBody.code(),
                    "Invalid request body: {}",
                    detail
                );
                messages::INVALID_BODY.to_string()
            }
            AppError::BadRequest(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Bad request: {}",
                    msg
                );
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                msg
            }
            AppError::Status { status, message } if status.is_server_error() => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    status = status.as_u16(),
                    "Unhandled failure: {}",
                    message
                );
                messages::INTERNAL_ERROR.to_string()
            }
            AppError::Status { message, .. } => message,
        };

        error_response(status, message)
    }
}

fn database_error_code(error: &DbErr) -> ErrorCode {
    match error {
        DbErr::ConnectionAcquire(_) => ErrorCode::DatabasePoolTimeout,
        _ => ErrorCode::DatabaseError,
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::error_response;
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::BAD_REQUEST, "ID inválido");
/// ```
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("Usuario no encontrado".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await.error, "Usuario no encontrado");
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let err = AppError::from(DbErr::Custom("relation \"users\" does not exist".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, messages::INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_invalid_id_message() {
        let response = AppError::InvalidId("abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.error, messages::INVALID_ID);
    }

    #[tokio::test]
    async fn test_attached_status_is_used() {
        let response = AppError::Status {
            status: StatusCode::CONFLICT,
            message: "duplicado".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_of(response).await.error, "duplicado");
    }

    #[tokio::test]
    async fn test_attached_server_status_is_masked() {
        let response = AppError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: "upstream exploded".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_of(response).await.error, messages::INTERNAL_ERROR);
    }
}
