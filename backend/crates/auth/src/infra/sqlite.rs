//! SQLite Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::entity::{
    auth_session::AuthSession,
    credentials::Credentials,
    user::{NewUser, User},
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, login::Login, phone_number::PhoneNumber,
    user_id::UserId, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// SQLite-backed auth repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn purge_expired_sessions(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < ?")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteAuthRepository {
    async fn insert(&self, user: &NewUser) -> AuthResult<UserId> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                login,
                encrypted_password,
                name,
                email,
                phone_number
            ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.login.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.phone_number.as_ref().map(|p| p.as_str()))
        .execute(&self.pool)
        .await?;

        Ok(UserId::from_i64(result.last_insert_rowid()))
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, login, name, email, phone_number
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_credentials(&self, login: &Login) -> AuthResult<Option<Credentials>> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            "SELECT id, encrypted_password FROM users WHERE login = ?",
        )
        .bind(login.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialsRow::into_credentials).transpose()
    }
}

// ============================================================================
// Auth Session Repository Implementation
// ============================================================================

impl AuthSessionRepository for SqliteAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                user_id,
                expires_at_ms,
                created_at
            ) VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_i64())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT session_id, user_id, expires_at_ms, created_at
            FROM sessions
            WHERE session_id = ?
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthSessionRow::into_session))
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    login: String,
    name: String,
    email: String,
    phone_number: Option<String>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_i64(self.id),
            login: Login::from_db(self.login),
            name: DisplayName::from_db(self.name),
            email: Email::from_db(self.email),
            phone_number: self.phone_number.map(PhoneNumber::from_db),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    id: i64,
    encrypted_password: String,
}

impl CredentialsRow {
    fn into_credentials(self) -> AuthResult<Credentials> {
        let password_hash = UserPassword::from_db(self.encrypted_password).map_err(|e| {
            AuthError::Internal(format!("Invalid password hash for user {}: {}", self.id, e))
        })?;

        Ok(Credentials {
            user_id: UserId::from_i64(self.id),
            password_hash,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    session_id: Uuid,
    user_id: i64,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl AuthSessionRow {
    fn into_session(self) -> AuthSession {
        AuthSession {
            session_id: self.session_id,
            user_id: UserId::from_i64(self.user_id),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}

/// Single-connection in-memory database with migrations applied
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;
    use kernel::error::store::StoreError;

    async fn test_pool() -> SqlitePool {
        memory_pool().await
    }

    fn new_user(login: &str, email: &str) -> NewUser {
        let raw = RawPassword::new("p1".to_string()).unwrap();
        NewUser {
            login: Login::new(login).unwrap(),
            password_hash: UserPassword::from_raw(&raw, None).unwrap(),
            name: DisplayName::new("Alice").unwrap(),
            email: Email::new(email).unwrap(),
            phone_number: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_user() {
        let repo = SqliteAuthRepository::new(test_pool().await);

        let user_id = UserRepository::insert(&repo, &new_user("alice", "a@x.com"))
            .await
            .unwrap();

        let by_id = UserRepository::find_by_id(&repo, user_id).await.unwrap().unwrap();
        assert_eq!(by_id.login.as_str(), "alice");
        assert_eq!(by_id.phone_number, None);

        let login = Login::new("alice").unwrap();
        let credentials = repo.find_credentials(&login).await.unwrap().unwrap();
        assert_eq!(credentials.user_id, user_id);
        assert!(
            credentials
                .password_hash
                .verify(&RawPassword::new("p1".to_string()).unwrap(), None)
        );
    }

    #[tokio::test]
    async fn test_duplicate_login_or_email_is_unique_violation() {
        let repo = SqliteAuthRepository::new(test_pool().await);
        UserRepository::insert(&repo, &new_user("alice", "a@x.com"))
            .await
            .unwrap();

        let dup_login = UserRepository::insert(&repo, &new_user("alice", "b@x.com")).await;
        assert!(matches!(
            dup_login,
            Err(AuthError::Store(StoreError::UniqueViolation { .. }))
        ));

        let dup_email = UserRepository::insert(&repo, &new_user("bob", "a@x.com")).await;
        match dup_email {
            Err(AuthError::Store(e)) => assert_eq!(e.violated_column(), Some("users.email")),
            other => panic!("expected unique violation, got {other:?}"),
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let repo = SqliteAuthRepository::new(test_pool().await);
        let user_id = UserRepository::insert(&repo, &new_user("alice", "a@x.com"))
            .await
            .unwrap();

        let live = AuthSession::new(user_id, chrono::Duration::hours(12));
        let expired = AuthSession::new(user_id, chrono::Duration::seconds(-5));
        AuthSessionRepository::create(&repo, &live).await.unwrap();
        AuthSessionRepository::create(&repo, &expired).await.unwrap();

        let found = AuthSessionRepository::find_by_id(&repo, live.session_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user_id, user_id);
        assert_eq!(found.expires_at_ms, live.expires_at_ms);

        assert_eq!(repo.purge_expired_sessions().await.unwrap(), 1);
        assert!(
            AuthSessionRepository::find_by_id(&repo, expired.session_id)
                .await
                .unwrap()
                .is_none()
        );

        AuthSessionRepository::delete(&repo, live.session_id)
            .await
            .unwrap();
        assert!(
            AuthSessionRepository::find_by_id(&repo, live.session_id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_session_for_unknown_user_is_rejected() {
        let repo = SqliteAuthRepository::new(test_pool().await);
        let orphan = AuthSession::new(UserId::from_i64(999), chrono::Duration::hours(1));

        let result = AuthSessionRepository::create(&repo, &orphan).await;
        assert!(matches!(
            result,
            Err(AuthError::Store(StoreError::ForeignKeyViolation(_)))
        ));
    }
}
