//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - SQLite implementations
//! - `presentation/` - Session middleware and extractors
//!
//! ## Features
//! - Registration with login, password, name, email, optional phone number
//! - Sign in with login + password
//! - Server-side sessions with signed cookie tokens
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, salted per password
//! - Session cookie carries only `session_id` plus an HMAC-SHA256 signature
//! - Expired sessions are deleted on first use

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::{SessionUser, User, Viewer};
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::{AuthMiddlewareState, CurrentUser};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
