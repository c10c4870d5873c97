//! Flash Messages
//!
//! One-shot messages carried in the `flash` cookie across a redirect.
//! The value is base64url of the messages joined with `\n`.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use platform::cookie::{CookieConfig, extract_cookie};
use platform::crypto::{from_base64url, to_base64url};

pub const FLASH_COOKIE_NAME: &str = "flash";

/// Messages left by the previous response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingFlash {
    messages: Vec<String>,
    /// A flash cookie was sent, readable or not, and must be cleared
    present: bool,
}

impl IncomingFlash {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    fn decode(value: &str) -> Vec<String> {
        let Ok(bytes) = from_base64url(value) else {
            return Vec::new();
        };
        let Ok(text) = String::from_utf8(bytes) else {
            return Vec::new();
        };

        text.split('\n')
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(match extract_cookie(&parts.headers, FLASH_COOKIE_NAME) {
            Some(value) => IncomingFlash {
                messages: Self::decode(&value),
                present: true,
            },
            None => IncomingFlash::default(),
        })
    }
}

fn flash_cookie(secure: bool) -> CookieConfig {
    CookieConfig {
        secure,
        ..CookieConfig::named(FLASH_COOKIE_NAME)
    }
}

/// `Set-Cookie` value carrying `messages` to the next page
pub fn set_flash_cookie(secure: bool, messages: &[&str]) -> String {
    let encoded = to_base64url(messages.join("\n").as_bytes());
    flash_cookie(secure).build_set_cookie(&encoded)
}

/// `Set-Cookie` value that removes the flash cookie once shown
pub fn clear_flash_cookie(secure: bool) -> String {
    flash_cookie(secure).build_delete_cookie()
}
