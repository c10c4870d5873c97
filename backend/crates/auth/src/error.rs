//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind, store::StoreError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required registration field was left blank
    #[error("Fill in all fields")]
    MissingFields,

    /// `password` and `repeat-password` differ
    #[error("Passwords differ")]
    PasswordMismatch,

    /// Login or email already belongs to another user
    #[error("Login already used")]
    AlreadyRegistered,

    /// A registration field exceeds its column or has the wrong shape
    #[error("{0}")]
    InvalidField(String),

    /// Login or password left blank on sign-in
    #[error("Fill in both login and password")]
    MissingCredentials,

    /// Unknown login or wrong password
    #[error("Wrong login or password")]
    InvalidCredentials,

    /// Session token missing, forged, expired, or pointing at a deleted user
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Storage failure
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::Store(StoreError::from(err))
    }
}

impl AuthError {
    /// True for errors the user fixes by editing the form
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AuthError::MissingFields
                | AuthError::PasswordMismatch
                | AuthError::AlreadyRegistered
                | AuthError::InvalidField(_)
                | AuthError::MissingCredentials
                | AuthError::InvalidCredentials
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::PasswordMismatch
            | AuthError::InvalidField(_)
            | AuthError::MissingCredentials => ErrorKind::BadRequest,
            AuthError::AlreadyRegistered => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Store(e) if e.is_transient() => ErrorKind::ServiceUnavailable,
            AuthError::Store(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // Never leak storage or internal details to the browser
            AuthError::Store(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "An error occurred, please try again later")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Store(e) => {
                tracing::error!(error = %e, transient = e.is_transient(), "Auth storage error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            AuthError::InvalidField(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(AuthError::MissingFields.to_string(), "Fill in all fields");
        assert_eq!(AuthError::PasswordMismatch.to_string(), "Passwords differ");
        assert_eq!(AuthError::AlreadyRegistered.to_string(), "Login already used");
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Wrong login or password"
        );
        assert!(AuthError::MissingCredentials.is_user_facing());
        assert!(!AuthError::SessionInvalid.is_user_facing());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::SessionInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::AlreadyRegistered.status_code(), StatusCode::CONFLICT);
        let transient = AuthError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(transient.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_storage_details_are_hidden() {
        let err = AuthError::from(sqlx::Error::RowNotFound);
        assert!(!err.to_app_error().message().contains("no rows"));
    }

    #[test]
    fn test_client_app_error_becomes_invalid_field() {
        let err = AuthError::from(AppError::bad_request("Invalid email format"));
        assert!(matches!(err, AuthError::InvalidField(ref m) if m == "Invalid email format"));
    }
}
