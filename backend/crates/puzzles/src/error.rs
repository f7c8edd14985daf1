//! Puzzle Error Types
//!
//! Puzzle-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. An incorrect answer is a reported
//! rejection, not a system fault.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Puzzle-specific result type alias
pub type PuzzleResult<T> = Result<T, PuzzleError>;

/// Puzzle-specific error variants
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// Puzzle not found
    #[error("Puzzle not found")]
    PuzzleNotFound,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Empty answer submission
    #[error("Answer is required")]
    AnswerRequired,

    /// Wrong answer - user-facing rejection, never retried server-side
    #[error("Incorrect answer")]
    IncorrectAnswer,

    /// Authenticated but not an administrator (reported as 401)
    #[error("Not authorized")]
    NotAuthorized,

    /// Malformed input
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PuzzleError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PuzzleError::PuzzleNotFound | PuzzleError::UserNotFound => StatusCode::NOT_FOUND,
            PuzzleError::AnswerRequired
            | PuzzleError::IncorrectAnswer
            | PuzzleError::Validation(_) => StatusCode::BAD_REQUEST,
            PuzzleError::NotAuthorized => StatusCode::UNAUTHORIZED,
            PuzzleError::Database(_) | PuzzleError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PuzzleError::PuzzleNotFound | PuzzleError::UserNotFound => ErrorKind::NotFound,
            PuzzleError::AnswerRequired
            | PuzzleError::IncorrectAnswer
            | PuzzleError::Validation(_) => ErrorKind::BadRequest,
            PuzzleError::NotAuthorized => ErrorKind::Unauthorized,
            PuzzleError::Database(_) | PuzzleError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PuzzleError::Database(e) => {
                tracing::error!(error = %e, "Puzzle database error");
            }
            PuzzleError::Internal(msg) => {
                tracing::error!(message = %msg, "Puzzle internal error");
            }
            PuzzleError::NotAuthorized => {
                tracing::warn!("Non-admin attempted an admin operation");
            }
            _ => {
                tracing::debug!(error = %self, "Puzzle error");
            }
        }
    }
}

impl IntoResponse for PuzzleError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<auth::AuthError> for PuzzleError {
    fn from(err: auth::AuthError) -> Self {
        match err {
            auth::AuthError::Database(e) => PuzzleError::Database(e),
            auth::AuthError::UserNotFound => PuzzleError::UserNotFound,
            other => PuzzleError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PuzzleError::PuzzleNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PuzzleError::IncorrectAnswer.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PuzzleError::AnswerRequired.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PuzzleError::NotAuthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            PuzzleError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
