//! Login Value Object
//!
//! The unique name a user signs in with. Compared exactly as typed
//! (after trimming surrounding whitespace).

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};

/// Column width of `users.login`
pub const LOGIN_MAX_LENGTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Login(String);

impl Login {
    pub fn new(login: impl Into<String>) -> AppResult<Self> {
        let login = login.into().trim().to_string();

        if login.is_empty() {
            return Err(AppError::bad_request("Login cannot be empty"));
        }

        if login.chars().count() > LOGIN_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Login must be at most {} characters",
                LOGIN_MAX_LENGTH
            )));
        }

        Ok(Self(login))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(login: impl Into<String>) -> Self {
        Self(login.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
