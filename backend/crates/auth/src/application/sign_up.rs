//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    login::Login,
    phone_number::PhoneNumber,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};
use kernel::error::store::StoreError;

/// Sign up input, as submitted by the register form
#[derive(Default, Clone)]
pub struct SignUpInput {
    pub login: String,
    pub password: String,
    pub repeat_password: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl SignUpInput {
    fn has_blank_required_field(&self) -> bool {
        // Passwords are taken as typed; whitespace is a valid password.
        [&self.login, &self.name, &self.email]
            .iter()
            .any(|field| field.trim().is_empty())
            || self.password.is_empty()
            || self.repeat_password.is_empty()
    }
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        if input.has_blank_required_field() {
            return Err(AuthError::MissingFields);
        }

        if input.password != input.repeat_password {
            return Err(AuthError::PasswordMismatch);
        }

        let login = Login::new(input.login)?;
        let name = DisplayName::new(input.name)?;
        let email = Email::new(input.email)?;
        let phone_number = PhoneNumber::parse_optional(input.phone_number.as_deref())?;

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let new_user = NewUser {
            login,
            password_hash,
            name,
            email,
            phone_number,
        };

        // Uniqueness of login and email is decided by the unique indexes.
        let user_id = match self.user_repo.insert(&new_user).await {
            Ok(user_id) => user_id,
            Err(AuthError::Store(e @ StoreError::UniqueViolation { .. })) => {
                tracing::info!(
                    login = %new_user.login,
                    column = e.violated_column().unwrap_or("unknown"),
                    "Sign up rejected: duplicate user"
                );
                return Err(AuthError::AlreadyRegistered);
            }
            Err(e) => return Err(e),
        };

        tracing::info!(user_id = %user_id, login = %new_user.login, "User signed up");

        Ok(new_user.into_user(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::sqlite::{SqliteAuthRepository, memory_pool};

    fn input(login: &str, email: &str) -> SignUpInput {
        SignUpInput {
            login: login.to_string(),
            password: "p1".to_string(),
            repeat_password: "p1".to_string(),
            name: "Alice".to_string(),
            email: email.to_string(),
            phone_number: Some("".to_string()),
        }
    }

    async fn use_case() -> (SignUpUseCase<SqliteAuthRepository>, Arc<SqliteAuthRepository>) {
        let repo = Arc::new(SqliteAuthRepository::new(memory_pool().await));
        let config = Arc::new(AuthConfig::development());
        (SignUpUseCase::new(repo.clone(), config), repo)
    }

    #[tokio::test]
    async fn test_sign_up_creates_user() {
        let (use_case, repo) = use_case().await;

        let user = use_case.execute(input("alice", "a@x.com")).await.unwrap();
        assert_eq!(user.login.as_str(), "alice");
        assert_eq!(user.phone_number, None);

        let stored = UserRepository::find_by_id(repo.as_ref(), user.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, user);
    }

    #[tokio::test]
    async fn test_password_mismatch_creates_nothing() {
        let (use_case, repo) = use_case().await;

        let mut mismatched = input("alice", "a@x.com");
        mismatched.repeat_password = "p2".to_string();

        let result = use_case.execute(mismatched).await;
        assert!(matches!(result, Err(AuthError::PasswordMismatch)));
        assert!(
            repo.find_credentials(&Login::from_db("alice"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_blank_field_is_missing_fields() {
        let (use_case, _) = use_case().await;

        let mut blank = input("alice", "a@x.com");
        blank.name = "  ".to_string();
        blank.repeat_password = "different".to_string();

        let result = use_case.execute(blank).await;
        assert!(matches!(result, Err(AuthError::MissingFields)));
    }

    #[tokio::test]
    async fn test_whitespace_password_is_accepted() {
        let (use_case, repo) = use_case().await;

        let mut spaces = input("alice", "a@x.com");
        spaces.password = "   ".to_string();
        spaces.repeat_password = "   ".to_string();
        use_case.execute(spaces).await.unwrap();

        let credentials = repo
            .find_credentials(&Login::from_db("alice"))
            .await
            .unwrap()
            .unwrap();
        assert!(
            credentials
                .password_hash
                .verify(&RawPassword::new("   ".to_string()).unwrap(), None)
        );
    }

    #[tokio::test]
    async fn test_empty_password_is_missing_fields() {
        let (use_case, _) = use_case().await;

        let mut empty = input("alice", "a@x.com");
        empty.repeat_password = String::new();

        let result = use_case.execute(empty).await;
        assert!(matches!(result, Err(AuthError::MissingFields)));
    }

    #[tokio::test]
    async fn test_duplicate_login_or_email_is_already_registered() {
        let (use_case, _) = use_case().await;
        use_case.execute(input("alice", "a@x.com")).await.unwrap();

        let same_login = use_case.execute(input("alice", "b@x.com")).await;
        assert!(matches!(same_login, Err(AuthError::AlreadyRegistered)));

        let same_email = use_case.execute(input("bob", "A@X.com")).await;
        assert!(matches!(same_email, Err(AuthError::AlreadyRegistered)));
    }

    #[tokio::test]
    async fn test_malformed_email_is_invalid_field() {
        let (use_case, _) = use_case().await;

        let result = use_case.execute(input("alice", "not-an-email")).await;
        assert!(matches!(result, Err(AuthError::InvalidField(_))));
    }
}
