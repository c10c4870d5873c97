//! Response Post-Processing

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

pub const LOGIN_PATH: &str = "/login";

/// Rewrite `401 Unauthorized` into `303 See Other` to the sign-in page
pub async fn redirect_unauthorized(response: Response) -> Response {
    if response.status() != StatusCode::UNAUTHORIZED {
        return response;
    }

    tracing::debug!("Unauthenticated request redirected to {}", LOGIN_PATH);
    Redirect::to(LOGIN_PATH).into_response()
}
