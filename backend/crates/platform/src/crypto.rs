//! Cryptographic Utilities
//!
//! Signed tokens have the shape `"{payload}.{base64url(hmac_sha256(key, payload))}"`.
//! The payload itself is not secret, only tamper-proof.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate a 256-bit signing secret
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Encode bytes as URL-safe base64 without padding
pub fn to_base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode URL-safe base64 without padding
pub fn from_base64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(s)
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Sign `payload`, producing `"{payload}.{signature}"`
pub fn sign_token(key: &[u8], payload: &str) -> String {
    let signature = hmac_sha256(key, payload.as_bytes());
    format!("{}.{}", payload, to_base64url(&signature))
}

/// Verify a token produced by [`sign_token`] and return its payload.
///
/// The signature comparison is constant-time.
pub fn verify_signed_token<'a>(key: &[u8], token: &'a str) -> Option<&'a str> {
    let (payload, signature_b64) = token.rsplit_once('.')?;
    let signature = from_base64url(signature_b64).ok()?;

    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature).ok()?;

    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secrets_differ() {
        assert_ne!(random_secret(), random_secret());
    }

    #[test]
    fn test_hmac_rfc4231_case_2() {
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_signed_token_verifies() {
        let key = [7u8; 32];
        let token = sign_token(&key, "3f1d2c4e-session");
        assert_eq!(verify_signed_token(&key, &token), Some("3f1d2c4e-session"));
    }

    #[test]
    fn test_signed_token_rejects_tampering() {
        let key = [7u8; 32];
        let token = sign_token(&key, "payload");

        let forged = token.replacen("payload", "payloaf", 1);
        assert_eq!(verify_signed_token(&key, &forged), None);
        assert_eq!(verify_signed_token(&[8u8; 32], &token), None);
        assert_eq!(verify_signed_token(&key, "no-signature"), None);
        assert_eq!(verify_signed_token(&key, "payload.!!!"), None);
    }
}
