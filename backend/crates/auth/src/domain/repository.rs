//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    auth_session::AuthSession, credentials::Credentials, user::NewUser, user::User,
};
use crate::domain::value_object::{login::Login, user_id::UserId};
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user and return the assigned id.
    ///
    /// A duplicate login or email fails with `AuthError::Store(StoreError::UniqueViolation)`.
    async fn insert(&self, user: &NewUser) -> AuthResult<UserId>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Load the password hash for a login
    async fn find_credentials(&self, login: &Login) -> AuthResult<Option<Credentials>>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID, expired or not
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;
}
