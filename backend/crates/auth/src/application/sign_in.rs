//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use crate::application::{config::AuthConfig, session_token};
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{login::Login, user_id::UserId, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub login: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    pub user_id: UserId,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.login.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        // A login that could never have been registered cannot match a row.
        let login = Login::new(input.login).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let credentials = self
            .user_repo
            .find_credentials(&login)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !credentials
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            tracing::warn!(login = %login, "Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        let session = AuthSession::new(credentials.user_id, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        let session_token = session_token::issue(&self.config, session.session_id);

        tracing::info!(
            user_id = %credentials.user_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            user_id: credentials.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::infra::sqlite::{SqliteAuthRepository, memory_pool};

    async fn registered() -> (SignInUseCase<SqliteAuthRepository, SqliteAuthRepository>, UserId) {
        let repo = Arc::new(SqliteAuthRepository::new(memory_pool().await));
        let config = Arc::new(AuthConfig::development());

        let user = SignUpUseCase::new(repo.clone(), config.clone())
            .execute(SignUpInput {
                login: "alice".to_string(),
                password: "p1".to_string(),
                repeat_password: "p1".to_string(),
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                phone_number: None,
            })
            .await
            .unwrap();

        (SignInUseCase::new(repo.clone(), repo, config), user.user_id)
    }

    fn input(login: &str, password: &str) -> SignInInput {
        SignInInput {
            login: login.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_correct_credentials_create_session_for_user() {
        let (use_case, user_id) = registered().await;

        let output = use_case.execute(input("alice", "p1")).await.unwrap();
        assert_eq!(output.user_id, user_id);

        let session_id = session_token::parse(&use_case.config, &output.session_token).unwrap();
        let session = AuthSessionRepository::find_by_id(use_case.session_repo.as_ref(), session_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.user_id, user_id);
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let (use_case, _) = registered().await;

        let result = use_case.execute(input("alice", "p2")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_login_is_rejected() {
        let (use_case, _) = registered().await;

        let result = use_case.execute(input("bob", "p1")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_pepper_must_match_the_one_used_at_sign_up() {
        let repo = Arc::new(SqliteAuthRepository::new(memory_pool().await));
        let peppered = Arc::new(AuthConfig::development().with_pepper("server-side"));

        SignUpUseCase::new(repo.clone(), peppered.clone())
            .execute(SignUpInput {
                login: "alice".to_string(),
                password: "p1".to_string(),
                repeat_password: "p1".to_string(),
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                phone_number: None,
            })
            .await
            .unwrap();

        let without_pepper = SignInUseCase::new(
            repo.clone(),
            repo.clone(),
            Arc::new(AuthConfig::development()),
        );
        let result = without_pepper.execute(input("alice", "p1")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));

        let with_pepper = SignInUseCase::new(repo.clone(), repo, peppered);
        assert!(with_pepper.execute(input("alice", "p1")).await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_credentials() {
        let (use_case, _) = registered().await;

        let result = use_case.execute(input("", "p1")).await;
        assert!(matches!(result, Err(AuthError::MissingCredentials)));

        let result = use_case.execute(input("alice", "")).await;
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }
}
