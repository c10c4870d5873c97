//! Presentation Layer
//!
//! Session middleware, request extractors, and session cookie helpers.
//! The login, register, and logout pages are served by the blog router.

pub mod middleware;

pub use middleware::{
    AuthMiddlewareState, CurrentUser, clear_session_cookie, load_viewer, require_auth_session,
    session_cookie,
};
