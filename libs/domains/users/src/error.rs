use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
pub const REQUIRED_FIELDS: &str = "name y email son requeridos";
pub const INVALID_EMAIL: &str = "email inválido";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i32),

    #[error("name and email are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid user id: {0}")]
    InvalidId(i32),

    #[error("Store error: {0}")]
    Store(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound(USER_NOT_FOUND.to_string()),
            UserError::MissingFields => AppError::BadRequest(REQUIRED_FIELDS.to_string()),
            UserError::InvalidEmail => AppError::BadRequest(INVALID_EMAIL.to_string()),
            UserError::InvalidId(id) => AppError::InvalidId(id.to_string()),
            UserError::Store(e) => AppError::Database(e),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
