//! Password Reset Value Object
//!
//! A pending reset: a high-entropy token paired with its expiry. The two
//! always travel together - set together when a reset is requested,
//! cleared together when the token is redeemed.

use chrono::{DateTime, Duration, Utc};

/// Token entropy in bytes; hex-encoded the token is twice this length
const RESET_TOKEN_BYTES: usize = 20;

/// A pending password reset for one user.
///
/// At most one reset is pending per user; issuing a new one overwrites
/// the previous token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReset {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl PasswordReset {
    /// Issue a fresh reset token valid for `ttl`.
    pub fn issue(ttl: std::time::Duration) -> Self {
        Self {
            token: platform::crypto::random_token_hex(RESET_TOKEN_BYTES),
            expires_at: Utc::now() + Duration::seconds(ttl.as_secs() as i64),
        }
    }

    /// Rebuild from stored columns.
    pub fn from_db(token: String, expires_at: DateTime<Utc>) -> Self {
        Self { token, expires_at }
    }

    /// A token is usable only strictly before its expiry instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Constant token match plus expiry check.
    pub fn matches(&self, token: &str, now: DateTime<Utc>) -> bool {
        self.token == token && self.is_valid_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_token_shape() {
        let reset = PasswordReset::issue(std::time::Duration::from_secs(3600));
        assert_eq!(reset.token.len(), RESET_TOKEN_BYTES * 2);
        assert!(reset.token.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(reset.expires_at > Utc::now());
    }

    #[test]
    fn test_validity_window() {
        let reset = PasswordReset::issue(std::time::Duration::from_secs(3600));

        assert!(reset.is_valid_at(Utc::now()));
        assert!(!reset.is_valid_at(reset.expires_at));
        assert!(!reset.is_valid_at(reset.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_matches() {
        let reset = PasswordReset::issue(std::time::Duration::from_secs(3600));
        let now = Utc::now();

        assert!(reset.matches(&reset.token, now));
        assert!(!reset.matches("deadbeef", now));
        assert!(!reset.matches(&reset.token, reset.expires_at));
    }
}
