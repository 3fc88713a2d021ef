use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const INVALID_USER_ID: &str = "invalid user ID";
pub const INVALID_USER_DATA: &str = "invalid user data: name and email are required";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// No record with the given id. Raised by the store.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A required field is empty. Raised by the service before the store is touched.
    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            UserError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            UserError::NotFound("abc".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            UserError::Validation(INVALID_USER_DATA.into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
