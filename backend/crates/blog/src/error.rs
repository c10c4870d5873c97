//! Blog Error Types
//!
//! Article-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind, store::StoreError};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Write that failed to commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitAction {
    Save,
    Delete,
}

impl CommitAction {
    /// Sentence shown to the author when the write fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            CommitAction::Save => "An error occurred while saving the article",
            CommitAction::Delete => "An error occurred while deleting the article",
        }
    }
}

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Article not found")]
    ArticleNotFound,

    /// Update or delete attempted by someone other than the author
    #[error("Only the author can change this article")]
    NotOwner,

    /// Submitted article content is blank or exceeds a column
    #[error("{0}")]
    Validation(String),

    /// Insert, update, or delete did not commit
    #[error("{}", .action.failure_message())]
    Commit {
        action: CommitAction,
        #[source]
        source: StoreError,
    },

    /// Read failure
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] auth::AuthError),
}

impl BlogError {
    pub fn commit(action: CommitAction, source: StoreError) -> Self {
        BlogError::Commit { action, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::ArticleNotFound => ErrorKind::NotFound,
            BlogError::NotOwner => ErrorKind::Forbidden,
            BlogError::Validation(_) => ErrorKind::BadRequest,
            BlogError::Commit { .. } => ErrorKind::InternalServerError,
            BlogError::Store(e) if e.is_transient() => ErrorKind::ServiceUnavailable,
            BlogError::Store(_) => ErrorKind::InternalServerError,
            BlogError::Auth(e) => e.kind(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            BlogError::Store(_) => {
                AppError::new(self.kind(), "An error occurred, please try again later")
            }
            BlogError::Auth(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            BlogError::Commit { action, source } => {
                tracing::error!(
                    error = %source,
                    action = ?action,
                    transient = source.is_transient(),
                    "Article commit failed"
                );
            }
            BlogError::Store(e) => {
                tracing::error!(error = %e, transient = e.is_transient(), "Blog storage error");
            }
            BlogError::NotOwner => {
                tracing::warn!("Article change attempted by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        match self {
            BlogError::Auth(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_commit_failure_is_plain_text() {
        let err = BlogError::commit(CommitAction::Delete, StoreError::from(sqlx::Error::PoolClosed));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"An error occurred while deleting the article");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(BlogError::ArticleNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(BlogError::NotOwner.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            BlogError::Validation("Title cannot be empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BlogError::from(auth::AuthError::SessionInvalid).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_read_failure_hides_details() {
        let err = BlogError::from(StoreError::from(sqlx::Error::RowNotFound));
        assert_eq!(
            err.to_app_error().message(),
            "An error occurred, please try again later"
        );
    }
}
