//! Form DTOs
//!
//! Field names match the HTML forms. Missing fields deserialize as empty
//! strings so that the use cases report them as blank.

use auth::application::{SignInInput, SignUpInput};
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::application::ArticleInput;
use crate::domain::value_objects::ArticleId;
use crate::error::BlogError;

/// `{id}` segment of `/posts/{id}/...`
///
/// Anything other than a non-negative integer that fits a rowid names no
/// article, so it is rejected as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticlePath(pub ArticleId);

impl ArticlePath {
    fn parse(raw: &str) -> Option<ArticleId> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<i64>().ok().map(ArticleId::from_i64)
    }
}

impl<S> FromRequestParts<S> for ArticlePath
where
    S: Send + Sync,
{
    type Rejection = BlogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| BlogError::ArticleNotFound)?;

        Self::parse(&raw)
            .map(ArticlePath)
            .ok_or(BlogError::ArticleNotFound)
    }
}

/// Body of POST /create-article and POST /posts/{id}/update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArticleForm {
    pub title: String,
    pub intro: String,
    pub text: String,
}

impl From<ArticleForm> for ArticleInput {
    fn from(form: ArticleForm) -> Self {
        ArticleInput {
            title: form.title,
            intro: form.intro,
            text: form.text,
        }
    }
}

/// Body of POST /login
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub login: String,
    pub password: String,
}

impl From<LoginForm> for SignInInput {
    fn from(form: LoginForm) -> Self {
        SignInInput {
            login: form.login,
            password: form.password,
        }
    }
}

/// Body of POST /register
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub login: String,
    pub password: String,
    #[serde(rename = "repeat-password")]
    pub repeat_password: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "phone-number")]
    pub phone_number: Option<String>,
}

impl From<RegisterForm> for SignUpInput {
    fn from(form: RegisterForm) -> Self {
        SignUpInput {
            login: form.login,
            password: form.password,
            repeat_password: form.repeat_password,
            name: form.name,
            email: form.email,
            phone_number: form.phone_number,
        }
    }
}
