//! Check Session Use Case
//!
//! Resolves a session cookie to the signed-in user.

use std::sync::Arc;

use crate::application::{config::AuthConfig, session_token};
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> CheckSessionUseCase<U, S>
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

    /// Return the user behind `session_token`.
    ///
    /// Fails with [`AuthError::SessionInvalid`] for forged tokens, unknown or
    /// expired sessions, and sessions whose user no longer exists.
    pub async fn current_user(&self, session_token: &str) -> AuthResult<User> {
        let session_id = session_token::parse(&self.config, session_token)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            tracing::debug!(session_id = %session_id, "Deleting expired session");
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        self.user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)
    }
}
