//! Phone Number Value Object
//!
//! Optional contact number, stored as typed. No format is enforced.

use kernel::error::app_error::{AppError, AppResult};

/// Column width of `users.phone_number`
pub const PHONE_NUMBER_MAX_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Blank input means "no phone number".
    pub fn parse_optional(raw: Option<&str>) -> AppResult<Option<Self>> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        if raw.chars().count() > PHONE_NUMBER_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Phone number must be at most {} characters",
                PHONE_NUMBER_MAX_LENGTH
            )));
        }

        Ok(Some(Self(raw.to_string())))
    }

    pub fn from_db(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
