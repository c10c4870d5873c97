//! Auth Middleware
//!
//! `load_viewer` resolves the session cookie once per request and stores the
//! resulting [`Viewer`] in request extensions. `require_auth_session` guards
//! protected routes and answers `401` for anonymous viewers.

use std::convert::Infallible;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::{HeaderMap, Request, StatusCode, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::session_user::Viewer;
use crate::error::AuthError;

/// Middleware state
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + AuthSessionRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthMiddlewareState<R>
where
    R: UserRepository + AuthSessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> AuthMiddlewareState<R>
where
    R: UserRepository + AuthSessionRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Resolve the session cookie in `headers` to a viewer.
    ///
    /// Storage failures are logged and the request continues anonymously.
    pub async fn resolve_viewer(&self, headers: &HeaderMap) -> Viewer {
        let Some(token) = platform::cookie::extract_cookie(headers, &self.config.session_cookie_name)
        else {
            return Viewer::Anonymous;
        };

        let use_case =
            CheckSessionUseCase::new(self.repo.clone(), self.repo.clone(), self.config.clone());

        match use_case.current_user(&token).await {
            Ok(user) => Viewer::Authenticated(user),
            Err(AuthError::SessionInvalid) => Viewer::Anonymous,
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed, continuing as anonymous");
                Viewer::Anonymous
            }
        }
    }
}

/// Middleware that resolves the viewer for every request
pub async fn load_viewer<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let viewer = state.resolve_viewer(req.headers()).await;
    req.extensions_mut().insert(viewer);

    next.run(req).await
}

/// Middleware that requires a valid auth session
///
/// Reuses the viewer stored by [`load_viewer`] when that layer ran first.
pub async fn require_auth_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let viewer = match req.extensions().get::<Viewer>() {
        Some(viewer) => viewer.clone(),
        None => state.resolve_viewer(req.headers()).await,
    };

    let Viewer::Authenticated(user) = viewer else {
        return Err(unauthorized());
    };

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, [("X-Auth-Required", "true")]).into_response()
}

/// Signed-in user, available behind [`require_auth_session`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(unauthorized)
    }
}

impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Viewer>().cloned().unwrap_or_default())
    }
}

/// `Set-Cookie` value carrying a freshly issued session token
pub fn session_cookie(config: &AuthConfig, session_token: &str) -> String {
    config.session_cookie().build_set_cookie(session_token)
}

/// `Set-Cookie` value that removes the session cookie
pub fn clear_session_cookie(config: &AuthConfig) -> String {
    config.session_cookie().build_delete_cookie()
}
