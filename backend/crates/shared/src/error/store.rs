//! Storage Error - Classification of persistence failures
//!
//! Every repository in the workspace returns [`StoreError`] instead of a raw
//! `sqlx::Error`, so callers can tell a constraint violation (a user-facing
//! problem) apart from a storage failure (an operator problem).

use thiserror::Error;

/// Persistence failure, classified at the repository boundary
#[derive(Debug, Error)]
pub enum StoreError {
    /// A UNIQUE constraint rejected the write
    #[error("unique constraint violated: {message}")]
    UniqueViolation {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// A FOREIGN KEY constraint rejected the write
    #[error("foreign key constraint violated")]
    ForeignKeyViolation(#[source] sqlx::Error),

    /// NOT NULL / CHECK constraint rejected the write
    #[error("constraint violated: {0}")]
    ConstraintViolation(#[source] sqlx::Error),

    /// The store could not be reached (pool exhausted, I/O failure)
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// Anything else the driver reported
    #[error("storage failure: {0}")]
    Storage(#[source] sqlx::Error),
}

/// `Result<T, StoreError>`
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// True when retrying the same operation later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }

    /// Column reported by a unique violation, e.g. `users.login`.
    ///
    /// SQLite reports `UNIQUE constraint failed: users.login`.
    pub fn violated_column(&self) -> Option<&str> {
        match self {
            StoreError::UniqueViolation { message, .. } => message
                .rsplit_once(": ")
                .map(|(_, column)| column.trim()),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind as DbErrorKind;

        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                DbErrorKind::UniqueViolation => StoreError::UniqueViolation {
                    message: db_err.message().to_string(),
                    source: err,
                },
                DbErrorKind::ForeignKeyViolation => StoreError::ForeignKeyViolation(err),
                DbErrorKind::NotNullViolation | DbErrorKind::CheckViolation => {
                    StoreError::ConstraintViolation(err)
                }
                _ => StoreError::Storage(err),
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err),
            _ => StoreError::Storage(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_transient() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(err.is_transient());
        assert_eq!(err.violated_column(), None);
    }

    #[test]
    fn test_row_not_found_is_storage_failure() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Storage(_)));
        assert!(!err.is_transient());
        assert_eq!(err.violated_column(), None);
    }

    #[tokio::test]
    async fn test_unique_violation_is_classified() {
        use sqlx::sqlite::SqlitePoolOptions;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query("CREATE TABLE users (login TEXT NOT NULL UNIQUE)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO users (login) VALUES ('alice')")
            .execute(&pool)
            .await
            .unwrap();

        let err: StoreError = sqlx::query("INSERT INTO users (login) VALUES ('alice')")
            .execute(&pool)
            .await
            .unwrap_err()
            .into();

        assert!(matches!(err, StoreError::UniqueViolation { .. }));
        assert_eq!(err.violated_column(), Some("users.login"));
    }
}
