//! Application Configuration
//!
//! Configuration for the auth application layer. Built once at startup
//! from the environment and passed down explicitly - handlers never read
//! env vars themselves.

use std::time::Duration;

use crate::domain::value_object::email::Email;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for bearer tokens
    pub jwt_secret: String,
    /// Bearer token lifetime (10 hours)
    pub token_ttl: Duration,
    /// Reset token lifetime (1 hour)
    pub reset_token_ttl: Duration,
    /// The single designated administrator address; `None` means no
    /// registration ever becomes an admin
    pub admin_email: Option<Email>,
    /// Public site base used in reset links
    pub site_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl: Duration::from_secs(10 * 3600), // 10 hours
            reset_token_ttl: Duration::from_secs(3600), // 1 hour
            admin_email: None,
            site_url: "http://localhost:3000".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            jwt_secret: platform::crypto::random_token_hex(32),
            ..Default::default()
        }
    }

    /// Whether a registration with this email becomes the administrator.
    ///
    /// Exact match on the case-folded address (the Email type already
    /// lowercases both sides).
    pub fn is_admin_email(&self, email: &Email) -> bool {
        self.admin_email.as_ref() == Some(email)
    }

    /// Reset link embedded in the recovery email.
    pub fn reset_url(&self, token: &str) -> String {
        format!("{}/resetpassword?token={}", self.site_url, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_email_match_is_case_folded() {
        let config = AuthConfig {
            admin_email: Some(Email::new("Admin@Example.com").unwrap()),
            ..Default::default()
        };

        assert!(config.is_admin_email(&Email::new("admin@example.com").unwrap()));
        assert!(config.is_admin_email(&Email::new("ADMIN@EXAMPLE.COM").unwrap()));
        assert!(!config.is_admin_email(&Email::new("other@example.com").unwrap()));
    }

    #[test]
    fn test_no_admin_configured() {
        let config = AuthConfig::default();
        assert!(!config.is_admin_email(&Email::new("anyone@example.com").unwrap()));
    }

    #[test]
    fn test_reset_url() {
        let config = AuthConfig {
            site_url: "https://app.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.reset_url("abc123"),
            "https://app.example.com/resetpassword?token=abc123"
        );
    }
}
