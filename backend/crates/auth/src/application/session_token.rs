//! Session Token
//!
//! The cookie value is `"{session_id}.{signature}"`. A forged or truncated
//! token never reaches the database.

use platform::crypto::{sign_token, verify_signed_token};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Sign a session id for the cookie
pub fn issue(config: &AuthConfig, session_id: Uuid) -> String {
    sign_token(&config.session_secret, &session_id.to_string())
}

/// Verify the signature and recover the session id
pub fn parse(config: &AuthConfig, token: &str) -> AuthResult<Uuid> {
    let payload =
        verify_signed_token(&config.session_secret, token).ok_or(AuthError::SessionInvalid)?;

    payload.parse().map_err(|_| AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_parse() {
        let config = AuthConfig::development();
        let session_id = Uuid::new_v4();
        let token = issue(&config, session_id);

        assert!(token.starts_with(&session_id.to_string()));
        assert_eq!(parse(&config, &token).unwrap(), session_id);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let token = issue(&AuthConfig::development(), Uuid::new_v4());
        let other = AuthConfig::development();
        assert!(matches!(parse(&other, &token), Err(AuthError::SessionInvalid)));
    }

    #[test]
    fn test_signed_garbage_rejected() {
        let config = AuthConfig::development();
        let token = sign_token(&config.session_secret, "not-a-uuid");
        assert!(matches!(parse(&config, &token), Err(AuthError::SessionInvalid)));
        assert!(parse(&config, "").is_err());
    }
}
