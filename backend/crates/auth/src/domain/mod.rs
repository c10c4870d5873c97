//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod session_user;
pub mod value_object;

// Re-exports
pub use entity::{auth_session::AuthSession, credentials::Credentials, user::NewUser, user::User};
pub use repository::{AuthSessionRepository, UserRepository};
pub use session_user::{SessionUser, Viewer};
