//! Bearer Token Service
//!
//! Issues and verifies the signed, time-limited bearer credential carried
//! on the `x-auth-token` header. The token encodes the user id and admin
//! flag; everything else is looked up per request.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::UserId;
use crate::error::{AuthError, AuthResult};

/// Header the client presents the token on
pub const TOKEN_HEADER: &str = "x-auth-token";

/// JWT claims
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id
    sub: String,
    is_admin: bool,
    /// Issued at (seconds since epoch)
    iat: i64,
    /// Expiry (seconds since epoch)
    exp: i64,
}

/// Verified identity extracted from a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: UserId,
    pub is_admin: bool,
}

/// Issues and verifies bearer tokens. Cheap to clone.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::seconds(config.token_ttl.as_secs() as i64),
        }
    }

    /// Issue a token for the given user.
    pub fn issue(&self, user_id: &UserId, is_admin: bool) -> AuthResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            is_admin,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {}", e)))
    }

    /// Verify a token's signature and expiry, returning the identity it
    /// carries.
    pub fn verify(&self, token: &str) -> AuthResult<AuthUser> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AuthError::InvalidAuthToken)?;

        let user_id = data
            .claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidAuthToken)?;

        Ok(AuthUser {
            user_id,
            is_admin: data.claims.is_admin,
        })
    }

    /// Service with a negative ttl, for expiry tests.
    #[cfg(test)]
    pub(crate) fn with_ttl_seconds(config: &AuthConfig, secs: i64) -> Self {
        Self {
            ttl: Duration::seconds(secs),
            ..Self::new(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::with_random_secret())
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = service();
        let user_id = UserId::new();

        let token = service.issue(&user_id, true).unwrap();
        let auth_user = service.verify(&token).unwrap();

        assert_eq!(auth_user.user_id, user_id);
        assert!(auth_user.is_admin);
    }

    #[test]
    fn test_admin_flag_preserved() {
        let service = service();
        let token = service.issue(&UserId::new(), false).unwrap();
        assert!(!service.verify(&token).unwrap().is_admin);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            service().verify("not.a.token"),
            Err(AuthError::InvalidAuthToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().issue(&UserId::new(), false).unwrap();
        let other = service();
        assert!(matches!(
            other.verify(&token),
            Err(AuthError::InvalidAuthToken)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = AuthConfig::with_random_secret();
        // Expired well past the default 60s validation leeway
        let issuer = TokenService::with_ttl_seconds(&config, -120);
        let token = issuer.issue(&UserId::new(), false).unwrap();

        let verifier = TokenService::new(&config);
        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidAuthToken)
        ));
    }
}
